//! Regex sweep for contact details
//!
//! Backfills email and phone on records whose extraction path left them
//! empty, using the original source text rather than the generation.

use crate::extract::record::ResumeRecord;
use regex::Regex;

pub struct ContactSweep {
    email_regex: Regex,
    phone_regex: Regex,
}

impl Default for ContactSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactSweep {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"\b(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
                .expect("Invalid phone regex");

        Self {
            email_regex,
            phone_regex,
        }
    }

    pub fn find_email(&self, text: &str) -> Option<String> {
        self.email_regex.find(text).map(|m| m.as_str().to_string())
    }

    pub fn find_phone(&self, text: &str) -> Option<String> {
        self.phone_regex.find(text).map(|m| m.as_str().to_string())
    }

    /// Fills empty email/phone fields from the source text. Fields the
    /// extraction already populated are left untouched.
    pub fn backfill(&self, record: &mut ResumeRecord, source_text: &str) {
        if record.contact_info.email.is_empty() {
            if let Some(email) = self.find_email(source_text) {
                record.contact_info.email = email;
            }
        }
        if record.contact_info.phone.is_empty() {
            if let Some(phone) = self.find_phone(source_text) {
                record.contact_info.phone = phone;
            }
        }
    }
}
