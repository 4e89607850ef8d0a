//! Resume file type detection

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" | "text" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("txt"), FileType::Text);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(FileType::from_path(Path::new("cv.pdf")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("no_extension")), FileType::Unknown);
    }
}
