//! JSON extraction from raw model generations
//!
//! Generations are not guaranteed to be well-formed JSON even when the
//! prompt demands it; the object is usually wrapped in prose or a
//! markdown fence. Bracketing on the outermost braces tolerates both.

use crate::extract::record::ResumeRecord;

/// Locates and decodes a JSON object embedded in arbitrary text.
///
/// Takes the substring between the first `{` and the last `}` and
/// attempts to decode it as a [`ResumeRecord`]; absent keys fill with
/// defaults. Returns `None` when no brace pair exists or the slice is
/// not valid JSON, which routes the caller to the heuristic fallback.
pub fn extract_record(raw: &str) -> Option<ResumeRecord> {
    let open = raw.find('{')?;
    let close = raw.rfind('}')?;
    if close <= open {
        return None;
    }

    let candidate = &raw[open..=close];
    match serde_json::from_str::<ResumeRecord>(candidate) {
        Ok(record) => Some(record),
        Err(e) => {
            log::debug!("Structured decode failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::record::ContactInfo;

    #[test]
    fn test_decodes_object_wrapped_in_prose() {
        let record = ResumeRecord {
            full_name: "Jane Doe".to_string(),
            contact_info: ContactInfo {
                email: "jane@example.com".to_string(),
                ..ContactInfo::default()
            },
            skills: vec!["Rust".to_string()],
            ..ResumeRecord::default()
        };
        let encoded = serde_json::to_string(&record).unwrap();
        let wrapped = format!("Here is the result:\n```json\n{}\n```\nDone.", encoded);

        let decoded = extract_record(&wrapped).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_markdown_fenced_object() {
        let raw = "Sure!\n```json\n{\"full_name\": \"Jane Doe\"}\n```";
        let decoded = extract_record(raw).unwrap();
        assert_eq!(decoded.full_name, "Jane Doe");
    }

    #[test]
    fn test_no_braces_yields_none() {
        assert!(extract_record("no structured content here").is_none());
        assert!(extract_record("").is_none());
    }

    #[test]
    fn test_malformed_json_yields_none() {
        assert!(extract_record("{\"full_name\": \"Jane").is_none());
        assert!(extract_record("prose { not json } prose").is_none());
    }

    #[test]
    fn test_reversed_braces_yield_none() {
        assert!(extract_record("} backwards {").is_none());
    }

    #[test]
    fn test_non_object_json_yields_none() {
        assert!(extract_record("[1, 2, 3]").is_none());
    }
}
