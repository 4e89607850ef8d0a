//! Heuristic fallback parser
//!
//! Reconstructs a [`ResumeRecord`] from loosely structured text when the
//! generation could not be decoded as JSON. The input is split into
//! blank-line-delimited blocks; the first line of a block is its heading
//! and decides how the remaining lines are consumed. The parser is total
//! and deterministic: unrecognized content is ignored and undetected
//! fields keep their defaults.

use crate::extract::record::{EducationEntry, ResumeRecord, WorkEntry};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const BULLET_CHARS: [char; 4] = ['*', '-', '•', '·'];

/// Case-insensitive substring test, the basis of every heading and
/// line heuristic here.
fn mentions(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// True when the line names any month abbreviation, taken as a date
/// range line.
fn looks_like_date_range(line: &str) -> bool {
    let lower = line.to_lowercase();
    MONTH_ABBREVIATIONS.iter().any(|m| lower.contains(m))
}

/// Substring test for "at", the location heuristic. Known to
/// false-positive on unrelated words ("automated", "data").
fn looks_like_location(line: &str) -> bool {
    mentions(line, "at")
}

fn is_bullet(line: &str) -> bool {
    line.starts_with(&BULLET_CHARS[..])
}

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(&BULLET_CHARS[..]).trim()
}

/// Splits a `key: value` line, trimming both halves.
fn key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// The GPA value sits after the last comma on its line, optionally
/// behind a "GPA:" label.
fn extract_gpa(line: &str) -> String {
    let tail = match line.rsplit_once(',') {
        Some((_, tail)) => tail,
        None => line,
    };
    let value = match tail.split_once(':') {
        Some((_, value)) => value,
        None => tail,
    };
    value.trim().to_string()
}

/// Splits text into blocks at blank-line boundaries. Lines are trimmed;
/// whitespace-only lines count as blank.
fn blocks(text: &str) -> Vec<Vec<&str>> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct FallbackParser;

impl FallbackParser {
    pub fn new() -> Self {
        Self
    }

    /// Best-effort parse of arbitrary text into the resume schema.
    /// Never fails; absent sections simply leave defaults in place.
    ///
    /// Blocks are handled in document order and each section kind is
    /// consumed once: education and work experience accumulate a single
    /// entry for the whole input, and later blocks of an already-seen
    /// kind are dropped.
    pub fn parse(&self, text: &str) -> ResumeRecord {
        let mut record = ResumeRecord::default();
        let mut skills_seen = false;
        let mut summary_seen = false;

        for block in blocks(text) {
            let heading = match block.first() {
                Some(heading) => *heading,
                None => continue,
            };

            if mentions(heading, "name") {
                self.consume_name_block(&block, &mut record);
            } else if mentions(heading, "contact") {
                self.consume_contact_block(&block, &mut record);
            } else if mentions(heading, "education") {
                if record.education.is_empty() {
                    record.education.push(self.consume_education_block(&block));
                }
            } else if mentions(heading, "experience") || mentions(heading, "work") {
                if record.work_experience.is_empty() {
                    record.work_experience.push(self.consume_work_block(&block));
                }
            } else if mentions(heading, "skill") {
                if !skills_seen {
                    self.consume_skills_block(&block, &mut record);
                    skills_seen = true;
                }
            } else if mentions(heading, "summary") || mentions(heading, "objective") {
                if !summary_seen {
                    record.summary = block[1..].join(" ").trim().to_string();
                    summary_seen = true;
                }
            }
            // anything else is ignored
        }

        record
    }

    fn consume_name_block(&self, block: &[&str], record: &mut ResumeRecord) {
        for line in block {
            if let Some((key, value)) = key_value(line) {
                if mentions(key, "name") && record.full_name.is_empty() {
                    record.full_name = value.to_string();
                }
            }
        }
    }

    fn consume_contact_block(&self, block: &[&str], record: &mut ResumeRecord) {
        let contact = &mut record.contact_info;
        for line in block {
            let (key, value) = match key_value(line) {
                Some(kv) => kv,
                None => continue,
            };
            // first match wins per field
            if mentions(key, "email") && contact.email.is_empty() {
                contact.email = value.to_string();
            } else if mentions(key, "phone") && contact.phone.is_empty() {
                contact.phone = value.to_string();
            } else if mentions(key, "linkedin") && contact.linkedin.is_empty() {
                contact.linkedin = value.to_string();
            } else if mentions(key, "location") && contact.location.is_empty() {
                contact.location = value.to_string();
            }
        }
    }

    fn consume_education_block(&self, block: &[&str]) -> EducationEntry {
        let mut entry = EducationEntry::default();
        let mut details: Vec<&str> = Vec::new();

        for (index, line) in block[1..].iter().enumerate() {
            if index == 0 {
                match line.split_once(',') {
                    Some((degree, institution)) => {
                        entry.degree = degree.trim().to_string();
                        entry.institution = institution.trim().to_string();
                    }
                    None => entry.degree = line.to_string(),
                }
            } else if mentions(line, "gpa") {
                entry.gpa = extract_gpa(line);
            } else if looks_like_date_range(line) {
                entry.date_range = line.to_string();
            } else {
                details.push(line);
            }
        }

        entry.details = details.join(" ");
        entry
    }

    fn consume_work_block(&self, block: &[&str]) -> WorkEntry {
        let mut entry = WorkEntry::default();

        for (index, line) in block[1..].iter().enumerate() {
            if index == 0 {
                match line.split_once(',') {
                    Some((title, company)) => {
                        entry.title = title.trim().to_string();
                        entry.company = company.trim().to_string();
                    }
                    None => entry.title = line.to_string(),
                }
            } else if is_bullet(line) {
                entry.responsibilities.push(strip_bullet(line).to_string());
            } else if looks_like_date_range(line) {
                entry.date_range = line.to_string();
            } else if looks_like_location(line) {
                entry.location = line.to_string();
            }
        }

        entry
    }

    fn consume_skills_block(&self, block: &[&str], record: &mut ResumeRecord) {
        for line in &block[1..] {
            // category labels before a colon are discarded
            let list = match line.split_once(':') {
                Some((_, rest)) => rest,
                None => line,
            };
            record.skills.extend(
                list.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ResumeRecord {
        FallbackParser::new().parse(text)
    }

    #[test]
    fn test_empty_input_yields_default_record() {
        assert_eq!(parse(""), ResumeRecord::default());
        assert_eq!(parse("\n\n\n"), ResumeRecord::default());
    }

    #[test]
    fn test_unrecognized_text_yields_default_record() {
        let record = parse("Lorem ipsum dolor sit amet.\n\nConsectetur adipiscing elit.");
        assert_eq!(record, ResumeRecord::default());
    }

    #[test]
    fn test_parse_is_idempotent_on_same_input() {
        let text = "Contact\nemail: a@b.com\n\nSkills\nRust, Go";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_name_block() {
        let record = parse("Name\nfull name: Jane Doe");
        assert_eq!(record.full_name, "Jane Doe");
    }

    #[test]
    fn test_contact_block() {
        let record = parse("Contact\nemail: a@b.com\nphone: 555-1234");
        assert_eq!(record.contact_info.email, "a@b.com");
        assert_eq!(record.contact_info.phone, "555-1234");
    }

    #[test]
    fn test_contact_first_match_wins_per_field() {
        let record = parse("Contact Information\nEmail: first@b.com\nWork Email: second@b.com");
        assert_eq!(record.contact_info.email, "first@b.com");
    }

    #[test]
    fn test_contact_key_matching_is_substring_based() {
        let record = parse("Contact\nLinkedIn Profile: linkedin.com/in/jane\nHome Location: Austin, TX");
        assert_eq!(record.contact_info.linkedin, "linkedin.com/in/jane");
        assert_eq!(record.contact_info.location, "Austin, TX");
    }

    #[test]
    fn test_skills_block_flattens_categories() {
        let record = parse("Skills\nTechnical: Python, Go\nSoft: Teamwork");
        assert_eq!(record.skills, vec!["Python", "Go", "Teamwork"]);
    }

    #[test]
    fn test_skills_line_without_category() {
        let record = parse("Skills\nRust, SQL, Docker");
        assert_eq!(record.skills, vec!["Rust", "SQL", "Docker"]);
    }

    #[test]
    fn test_education_block() {
        let record = parse(
            "Education\nBS Computer Science, State University\nSep 2016 - Jun 2020\nGPA: 3.8\nDean's list",
        );
        assert_eq!(record.education.len(), 1);
        let entry = &record.education[0];
        assert_eq!(entry.degree, "BS Computer Science");
        assert_eq!(entry.institution, "State University");
        assert_eq!(entry.date_range, "Sep 2016 - Jun 2020");
        assert_eq!(entry.gpa, "3.8");
        assert_eq!(entry.details, "Dean's list");
    }

    #[test]
    fn test_education_first_line_without_comma_is_degree() {
        let record = parse("Education\nPhD Physics");
        assert_eq!(record.education[0].degree, "PhD Physics");
        assert_eq!(record.education[0].institution, "");
    }

    #[test]
    fn test_education_gpa_after_comma() {
        let record = parse("Education\nBA History, Some College\nHonors program, GPA: 3.5");
        assert_eq!(record.education[0].gpa, "3.5");
    }

    // Two sub-entries in one block still produce a single entry; the
    // second degree line lands in details. Documented limitation.
    #[test]
    fn test_education_two_sub_entries_append_once() {
        let record = parse(
            "Education\nBS Math, State University\nMS Statistics and more from Tech Institute",
        );
        assert_eq!(record.education.len(), 1);
    }

    #[test]
    fn test_multiple_education_blocks_append_once() {
        let record = parse(
            "Education\nBS Math, State University\n\nEducation\nMS Statistics, Tech Institute",
        );
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].degree, "BS Math");
    }

    #[test]
    fn test_work_block() {
        let record = parse(
            "Work Experience\nSoftware Engineer, Acme Corp\nJan 2021 - Present\n* Built billing service\n- Improved CI runtime",
        );
        assert_eq!(record.work_experience.len(), 1);
        let entry = &record.work_experience[0];
        assert_eq!(entry.title, "Software Engineer");
        assert_eq!(entry.company, "Acme Corp");
        assert_eq!(entry.date_range, "Jan 2021 - Present");
        assert_eq!(
            entry.responsibilities,
            vec!["Built billing service", "Improved CI runtime"]
        );
    }

    #[test]
    fn test_work_location_heuristic() {
        let record = parse("Experience\nEngineer\nBased at Seattle HQ");
        assert_eq!(record.work_experience[0].location, "Based at Seattle HQ");
    }

    // "Relocated" contains "at": the substring heuristic accepts it.
    #[test]
    fn test_work_location_false_positive_accepted() {
        let record = parse("Experience\nEngineer\nRelocated twice");
        assert_eq!(record.work_experience[0].location, "Relocated twice");
    }

    #[test]
    fn test_multiple_work_blocks_append_once() {
        let record = parse(
            "Experience\nEngineer, Acme\n\nWork History\nManager, Globex",
        );
        assert_eq!(record.work_experience.len(), 1);
        assert_eq!(record.work_experience[0].company, "Acme");
    }

    #[test]
    fn test_summary_block_joins_lines() {
        let record = parse("Summary\nSeasoned engineer.\nShips reliable systems.");
        assert_eq!(record.summary, "Seasoned engineer. Ships reliable systems.");
    }

    #[test]
    fn test_objective_heading_feeds_summary() {
        let record = parse("Objective\nFind interesting problems.");
        assert_eq!(record.summary, "Find interesting problems.");
    }

    #[test]
    fn test_unknown_blocks_ignored() {
        let record = parse("References\nAvailable on request.\n\nSkills\nRust");
        assert_eq!(record.skills, vec!["Rust"]);
        assert_eq!(record.summary, "");
    }

    #[test]
    fn test_second_skills_block_dropped() {
        let record = parse("Skills\nRust\n\nMore Skills\nGo");
        assert_eq!(record.skills, vec!["Rust"]);
    }

    #[test]
    fn test_normalized_bullet_characters_stripped() {
        let record = parse("Experience\nAnalyst\n• Wrote reports");
        assert_eq!(record.work_experience[0].responsibilities, vec!["Wrote reports"]);
    }

    #[test]
    fn test_gpa_extraction_variants() {
        assert_eq!(extract_gpa("GPA: 3.8"), "3.8");
        assert_eq!(extract_gpa("Honors, GPA: 3.5"), "3.5");
        assert_eq!(extract_gpa("3.9 GPA"), "3.9 GPA");
    }

    #[test]
    fn test_month_predicate() {
        assert!(looks_like_date_range("Jan 2020 - Dec 2021"));
        assert!(looks_like_date_range("graduated in may"));
        assert!(!looks_like_date_range("no dates here"));
    }
}
