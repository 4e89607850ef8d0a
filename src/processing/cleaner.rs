//! Cleaning and normalization of extracted resume text
//!
//! PDF and markdown extraction leave uneven whitespace, exotic bullet
//! glyphs, and stray page numbers behind. The cleaner normalizes those
//! while preserving line and blank-line structure, which the fallback
//! parser depends on.

use crate::config::ProcessingConfig;
use crate::error::Result;
use regex::Regex;

pub struct TextCleaner {
    excess_newlines: Regex,
    inline_spaces: Regex,
    bullet_glyphs: Regex,
    dash_glyphs: Regex,
    page_number_line: Regex,
    normalize_bullets: bool,
    strip_page_numbers: bool,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(&ProcessingConfig {
            normalize_bullets: true,
            strip_page_numbers: true,
            enable_contact_backfill: true,
        })
    }
}

impl TextCleaner {
    pub fn new(config: &ProcessingConfig) -> Self {
        let excess_newlines = Regex::new(r"\n{3,}").expect("Invalid newline regex");
        let inline_spaces = Regex::new(r"[ \t]+").expect("Invalid space regex");
        let bullet_glyphs = Regex::new(r"[•⁃◦▪▫●]").expect("Invalid bullet regex");
        let dash_glyphs = Regex::new(r"[–—―]").expect("Invalid dash regex");
        // a digits-only line is almost always a page number
        let page_number_line = Regex::new(r"\n[ \t]*\d{1,3}[ \t]*\n").expect("Invalid page regex");

        Self {
            excess_newlines,
            inline_spaces,
            bullet_glyphs,
            dash_glyphs,
            page_number_line,
            normalize_bullets: config.normalize_bullets,
            strip_page_numbers: config.strip_page_numbers,
        }
    }

    /// Cleans raw extracted text into the single string handed to the
    /// extraction pipeline. Deterministic and total.
    pub fn clean(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let mut cleaned = text.replace("\r\n", "\n").replace('\r', "\n");

        if self.strip_page_numbers {
            cleaned = self.page_number_line.replace_all(&cleaned, "\n").to_string();
        }

        cleaned = self.excess_newlines.replace_all(&cleaned, "\n\n").to_string();
        cleaned = self.inline_spaces.replace_all(&cleaned, " ").to_string();

        if self.normalize_bullets {
            cleaned = self.bullet_glyphs.replace_all(&cleaned, "*").to_string();
        }
        cleaned = self.dash_glyphs.replace_all(&cleaned, "-").to_string();

        let trimmed_lines: Vec<&str> = cleaned.lines().map(str::trim).collect();
        Ok(trimmed_lines.join("\n").trim().to_string())
    }
}
