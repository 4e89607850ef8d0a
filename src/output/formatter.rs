//! Formatters for parsed resume records

use crate::error::Result;
use crate::extract::record::ResumeRecord;
use colored::Colorize;

/// Trait for rendering a parsed record into a displayable string.
pub trait RecordFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String>;
}

/// Console formatter with colored section headers.
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self { use_colors }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().blue().to_string()
        } else {
            text.to_string()
        }
    }
}

impl RecordFormatter for ConsoleFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String> {
        let mut out = String::new();

        let name = if record.full_name.is_empty() {
            "(name not detected)"
        } else {
            &record.full_name
        };
        out.push_str(&format!("{}\n", self.heading(name)));

        let contact = &record.contact_info;
        for (label, value) in [
            ("Email", &contact.email),
            ("Phone", &contact.phone),
            ("LinkedIn", &contact.linkedin),
            ("Location", &contact.location),
        ] {
            if !value.is_empty() {
                out.push_str(&format!("  {}: {}\n", label, value));
            }
        }

        if !record.summary.is_empty() {
            out.push_str(&format!("\n{}\n{}\n", self.heading("Summary"), record.summary));
        }

        if !record.skills.is_empty() {
            out.push_str(&format!(
                "\n{}\n{}\n",
                self.heading("Skills"),
                record.skills.join(", ")
            ));
        }

        if !record.work_experience.is_empty() {
            out.push_str(&format!("\n{}\n", self.heading("Work Experience")));
            for entry in &record.work_experience {
                out.push_str(&format!(
                    "  {} - {} {}\n",
                    entry.title, entry.company, entry.date_range
                ));
                for responsibility in &entry.responsibilities {
                    out.push_str(&format!("    * {}\n", responsibility));
                }
            }
        }

        if !record.education.is_empty() {
            out.push_str(&format!("\n{}\n", self.heading("Education")));
            for entry in &record.education {
                out.push_str(&format!(
                    "  {} - {} {}\n",
                    entry.degree, entry.institution, entry.date_range
                ));
                if !entry.gpa.is_empty() {
                    out.push_str(&format!("    GPA: {}\n", entry.gpa));
                }
            }
        }

        if !record.certifications.is_empty() {
            out.push_str(&format!(
                "\n{}\n{}\n",
                self.heading("Certifications"),
                record.certifications.join(", ")
            ));
        }

        if !record.projects.is_empty() {
            out.push_str(&format!("\n{}\n", self.heading("Projects")));
            for project in &record.projects {
                out.push_str(&format!("  {}: {}\n", project.title, project.description));
            }
        }

        Ok(out)
    }
}

/// JSON formatter, pretty-printed; serializes the record verbatim with
/// all 8 top-level keys present.
pub struct JsonFormatter;

impl RecordFormatter for JsonFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(record)?)
    }
}

/// CSV formatter producing a header row and one flattened value row.
/// Nested sequences are joined into readable summary strings.
pub struct CsvFormatter;

impl CsvFormatter {
    fn flatten(record: &ResumeRecord) -> Vec<(&'static str, String)> {
        let education = record
            .education
            .iter()
            .map(|e| {
                let mut s = format!("{} - {}", e.degree, e.institution);
                if !e.date_range.is_empty() {
                    s.push_str(&format!(" ({})", e.date_range));
                }
                s
            })
            .collect::<Vec<_>>()
            .join("; ");

        let experience = record
            .work_experience
            .iter()
            .map(|w| {
                let mut s = format!("{} - {}", w.title, w.company);
                if !w.date_range.is_empty() {
                    s.push_str(&format!(" ({})", w.date_range));
                }
                s
            })
            .collect::<Vec<_>>()
            .join("; ");

        let projects = record
            .projects
            .iter()
            .map(|p| p.title.clone())
            .collect::<Vec<_>>()
            .join("; ");

        vec![
            ("full_name", record.full_name.clone()),
            ("email", record.contact_info.email.clone()),
            ("phone", record.contact_info.phone.clone()),
            ("linkedin", record.contact_info.linkedin.clone()),
            ("location", record.contact_info.location.clone()),
            ("summary", record.summary.clone()),
            ("skills", record.skills.join(", ")),
            ("education", education),
            ("work_experience", experience),
            ("certifications", record.certifications.join(", ")),
            ("projects", projects),
        ]
    }
}

impl RecordFormatter for CsvFormatter {
    fn format_record(&self, record: &ResumeRecord) -> Result<String> {
        let flattened = Self::flatten(record);

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(flattened.iter().map(|(key, _)| *key))?;
        writer.write_record(flattened.iter().map(|(_, value)| value.as_str()))?;

        let bytes = writer
            .into_inner()
            .map_err(|e| crate::error::ResumeParserError::Export(e.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|e| crate::error::ResumeParserError::Export(e.to_string()))
    }
}
