//! Two-tier structured extraction: prompt-templated API call with a
//! heuristic fallback parser.

pub mod client;
pub mod fallback;
pub mod json;
pub mod pipeline;
pub mod prompts;
pub mod record;

pub use client::{CohereClient, GenerateClient};
pub use fallback::FallbackParser;
pub use pipeline::ResumeParser;
pub use record::ResumeRecord;
