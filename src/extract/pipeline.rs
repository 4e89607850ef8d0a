//! Extraction pipeline orchestration
//!
//! One invocation per resume: render the prompt, call the generation
//! client, decode the structured response, and fall back to heuristics
//! when decoding fails. Only configuration and API-communication errors
//! surface; every other path yields a record.

use crate::error::Result;
use crate::extract::client::GenerateClient;
use crate::extract::fallback::FallbackParser;
use crate::extract::json;
use crate::extract::prompts::PromptTemplates;
use crate::extract::record::ResumeRecord;
use crate::processing::ContactSweep;
use log::{debug, info, warn};

pub struct ResumeParser {
    templates: PromptTemplates,
    client: Box<dyn GenerateClient>,
    fallback: FallbackParser,
    contact_sweep: ContactSweep,
    contact_backfill: bool,
}

impl ResumeParser {
    pub fn new(client: Box<dyn GenerateClient>) -> Self {
        Self {
            templates: PromptTemplates::default(),
            client,
            fallback: FallbackParser::new(),
            contact_sweep: ContactSweep::new(),
            contact_backfill: true,
        }
    }

    pub fn with_contact_backfill(mut self, enable: bool) -> Self {
        self.contact_backfill = enable;
        self
    }

    /// Parses one cleaned resume text into a [`ResumeRecord`].
    ///
    /// A failed generation call aborts the invocation; a generation that
    /// cannot be decoded as JSON is recovered locally by the fallback
    /// parser, fed with the raw generation text.
    pub async fn parse(&self, cleaned_text: &str) -> Result<ResumeRecord> {
        let prompt = self.templates.render_extraction(cleaned_text);
        let raw = self.client.generate(&prompt).await?;

        debug!("Received {} chars of generated text", raw.chars().count());

        let mut record = match json::extract_record(&raw) {
            Some(record) => {
                info!("Structured extraction succeeded");
                record
            }
            None => {
                warn!("Generation was not valid JSON, using heuristic fallback parser");
                self.fallback.parse(&raw)
            }
        };

        if self.contact_backfill {
            self.contact_sweep.backfill(&mut record, cleaned_text);
        }

        Ok(record)
    }
}
