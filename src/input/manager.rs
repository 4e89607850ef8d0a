//! Routing of resume files to the right text extractor

use crate::error::{Result, ResumeParserError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Reads one resume file and returns its raw text content.
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeParserError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::Unknown => Err(ResumeParserError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }
}
