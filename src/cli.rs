//! CLI interface for SkillSpark

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillspark")]
#[command(about = "Resume skill analysis, job matching and role roadmaps")]
#[command(long_about = "Upload a resume for analysis, see how your skills match open jobs, and get a learning roadmap for the role you want")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a resume (PDF or DOCX) for analysis
    Upload {
        /// Path to the resume file
        file: PathBuf,

        /// Also select the first suggested role that has a roadmap
        #[arg(long)]
        select_first_role: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Select the role used for the roadmap (key or role name)
    SelectRole {
        /// e.g. "backend" or "Backend Developer"
        role: String,
    },

    /// Show jobs ranked by how well they match your skills
    Jobs {
        /// Only show remote jobs
        #[arg(long)]
        remote_only: bool,

        /// Hide jobs below this match percentage
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_match: Option<u8>,

        /// Show learning resources for missing skills
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show the learning roadmap for the selected role
    Roadmap {
        /// Use this role instead of the stored selection
        #[arg(short, long)]
        role: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List the roles that have a roadmap
    Roles,

    /// Forget the stored analysis and selected role
    Clear,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "service.timeout_secs")
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.trim().to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("json"), Ok(OutputFormat::Json));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_parse_jobs_flags() {
        let cli = Cli::parse_from(["skillspark", "jobs", "--remote-only", "--min-match", "40"]);
        match cli.command {
            Commands::Jobs { remote_only, min_match, .. } => {
                assert!(remote_only);
                assert_eq!(min_match, Some(40));
            }
            _ => panic!("expected jobs command"),
        }

        assert!(Cli::try_parse_from(["skillspark", "jobs", "--min-match", "150"]).is_err());
    }
}
