//! CLI interface for the resume extractor

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-extractor")]
#[command(about = "LLM-assisted structured data extraction from free-text resumes")]
#[command(
    long_about = "Extract structured fields (name, contact info, education, experience, skills) from resumes via the Cohere Generate API, with a heuristic fallback parser for responses that are not valid JSON"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a resume file into a structured record
    Parse {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, csv
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to a file instead of printing
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Skip the regex contact backfill pass
        #[arg(long)]
        no_backfill: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "csv" => Ok(crate::config::OutputFormat::Csv),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, csv",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("csv").unwrap(), OutputFormat::Csv);
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_file_extension_validation() {
        let path = PathBuf::from("resume.PDF");
        assert!(validate_file_extension(&path, &["pdf", "txt", "md"]).is_ok());

        let path = PathBuf::from("resume.docx");
        assert!(validate_file_extension(&path, &["pdf", "txt", "md"]).is_err());
    }
}
