//! Saving parsed records to disk

use crate::config::OutputFormat;
use crate::error::{Result, ResumeParserError};
use crate::extract::record::ResumeRecord;
use crate::output::formatter::{CsvFormatter, JsonFormatter, RecordFormatter};
use chrono::Local;
use log::info;
use std::path::{Path, PathBuf};

pub struct Exporter {
    export_dir: PathBuf,
}

impl Exporter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }

    /// Writes the record in the given format, returning the path of the
    /// created file. File names derive from the candidate name plus a
    /// timestamp.
    pub fn export(&self, record: &ResumeRecord, format: &OutputFormat) -> Result<PathBuf> {
        let (content, extension) = match format {
            OutputFormat::Json => (JsonFormatter.format_record(record)?, "json"),
            OutputFormat::Csv => (CsvFormatter.format_record(record)?, "csv"),
            OutputFormat::Console => {
                return Err(ResumeParserError::Export(
                    "Console output is not written to a file".to_string(),
                ))
            }
        };

        std::fs::create_dir_all(&self.export_dir)?;

        let path = self.export_dir.join(Self::generate_filename(
            &record.full_name,
            extension,
        ));
        std::fs::write(&path, content)?;

        info!("Exported parsed resume to {}", path.display());
        Ok(path)
    }

    /// Writes the record to an explicit path, format chosen by the
    /// path's extension (`.json` or `.csv`).
    pub fn export_to(&self, record: &ResumeRecord, path: &Path) -> Result<()> {
        let format = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => OutputFormat::Json,
            Some("csv") => OutputFormat::Csv,
            other => {
                return Err(ResumeParserError::Export(format!(
                    "Unsupported export extension: {:?}",
                    other
                )))
            }
        };

        let content = match format {
            OutputFormat::Json => JsonFormatter.format_record(record)?,
            OutputFormat::Csv => CsvFormatter.format_record(record)?,
            OutputFormat::Console => unreachable!(),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        info!("Exported parsed resume to {}", path.display());
        Ok(())
    }

    fn generate_filename(candidate_name: &str, extension: &str) -> String {
        let base = if candidate_name.trim().is_empty() {
            "candidate".to_string()
        } else {
            candidate_name
                .chars()
                .map(|c| if c.is_alphanumeric() { c } else { '_' })
                .collect()
        };
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        format!("{}_{}.{}", base, timestamp, extension)
    }
}
