//! Input handling
//! Detects resume file types and loads uploads from disk

pub mod file_detector;
pub mod upload;
