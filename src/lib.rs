//! Resume extractor library

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeParserError};
pub use extract::record::ResumeRecord;
