// Resume analysis: ATS-style text scoring over pasted text or uploaded PDFs.

pub mod analyzer;
pub mod extract;
pub mod handlers;
