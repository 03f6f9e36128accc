// Autocomplete vocabularies, skill recommendations and the profile notification feed.
pub mod autocomplete;
pub mod handlers;
pub mod lists;
pub mod notifications;
pub mod recommend;
