//! Text extraction from resume source files

use crate::error::{Result, ResumeParserError};
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeParserError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeParserError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeParserError::Io)?;
        Ok(content)
    }
}

/// Markdown resumes are rendered to HTML and flattened back to plain
/// text so the pipeline sees the same shape as other sources.
pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ResumeParserError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("</h1>", "\n")
            .replace("</h2>", "\n")
            .replace("</h3>", "\n")
            .replace("</li>", "\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .collect();

        lines.join("\n").trim().to_string()
    }
}
