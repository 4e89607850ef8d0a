//! Prompt template for structured resume extraction

/// Prompt template with a `{resume}` placeholder.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub extraction: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            extraction: EXTRACTION_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Render the extraction prompt for one resume.
    ///
    /// Pure substitution: the resume text is embedded between triple
    /// backticks without escaping, so backtick fences inside the resume
    /// itself can corrupt the delimiter. The JSON extractor downstream
    /// tolerates the resulting malformed generations.
    pub fn render_extraction(&self, resume_text: &str) -> String {
        self.extraction.replace("{resume}", resume_text)
    }
}

const EXTRACTION_TEMPLATE: &str = r#"As an expert resume analyzer, extract structured information from the resume below.
Identify the candidate's name, contact details, professional summary, skills,
work history, education, certifications, and projects.

Resume text:
```
{resume}
```

Return the extracted information as a valid JSON object with exactly this structure:
```json
{
  "full_name": "",
  "contact_info": {
    "email": "",
    "phone": "",
    "linkedin": "",
    "location": ""
  },
  "summary": "",
  "skills": [],
  "work_experience": [
    {
      "title": "",
      "company": "",
      "date_range": "",
      "location": "",
      "responsibilities": []
    }
  ],
  "education": [
    {
      "degree": "",
      "institution": "",
      "date_range": "",
      "gpa": "",
      "details": ""
    }
  ],
  "certifications": [],
  "projects": [
    {
      "title": "",
      "description": "",
      "technologies": []
    }
  ]
}
```
Ensure all JSON fields are properly formatted and escaped. Leave fields empty
if the information is not present in the resume.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED_FIELDS: [&str; 8] = [
        "full_name",
        "contact_info",
        "summary",
        "skills",
        "work_experience",
        "education",
        "certifications",
        "projects",
    ];

    #[test]
    fn test_rendered_prompt_contains_resume_text() {
        let templates = PromptTemplates::default();
        let resume = "Jane Doe\nSoftware Engineer at Acme Corp\n\nSkills\nRust, Python";
        let prompt = templates.render_extraction(resume);
        assert!(prompt.contains(resume));
    }

    #[test]
    fn test_rendered_prompt_lists_all_required_fields() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_extraction("anything");
        for field in REQUIRED_FIELDS {
            assert!(prompt.contains(field), "prompt missing field {}", field);
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let templates = PromptTemplates::default();
        let a = templates.render_extraction("same input");
        let b = templates.render_extraction("same input");
        assert_eq!(a, b);
    }

    #[test]
    fn test_unicode_resume_embedded_verbatim() {
        let templates = PromptTemplates::default();
        let resume = "Ingénieur logiciel — résumé\t漢字";
        let prompt = templates.render_extraction(resume);
        assert!(prompt.contains(resume));
    }
}
