//! SkillSpark library: resume analysis client, job matching and role roadmaps

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod service;
pub mod session;

pub use config::Config;
pub use error::{Result, SkillSparkError};
