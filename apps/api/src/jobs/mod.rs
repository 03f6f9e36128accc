// Job search: external provider with a scored, paginated built-in catalog as fallback.

pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod provider;
pub mod ranking;
pub mod service;
