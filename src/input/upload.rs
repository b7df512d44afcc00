//! Resume files prepared for upload to the analysis service

use crate::error::{Result, SkillSparkError};
use crate::input::file_detector::FileType;
use log::info;
use std::path::Path;
use tokio::fs;

/// A validated resume file read into memory
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub file_type: FileType,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    /// Validate the extension and read the file. Only PDF and DOCX are accepted.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_type = FileType::from_path(path);
        if file_type == FileType::Unknown {
            return Err(SkillSparkError::UnsupportedFormat(format!(
                "{}: Please upload a PDF or DOCX file",
                path.display()
            )));
        }

        if !path.exists() {
            return Err(SkillSparkError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| SkillSparkError::InvalidInput(format!("Not a file: {}", path.display())))?;

        let bytes = fs::read(path).await?;
        if bytes.is_empty() {
            return Err(SkillSparkError::InvalidInput(format!("File is empty: {}", path.display())));
        }

        info!("Loaded {} ({} bytes, {:?})", file_name, bytes.len(), file_type);

        Ok(Self {
            file_name,
            file_type,
            bytes,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.file_type.mime_type().unwrap_or("application/octet-stream")
    }
}
