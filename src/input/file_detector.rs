//! File type detection for resume uploads

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }

    /// MIME type sent with the multipart file part
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            FileType::Pdf => Some("application/pdf"),
            FileType::Docx => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            FileType::Unknown => None,
        }
    }
}
