//! Resume analysis service: response model and HTTP client

pub mod analysis;
pub mod client;

pub use analysis::AnalysisResult;
pub use client::AnalysisClient;
