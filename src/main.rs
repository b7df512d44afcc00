//! SkillSpark: resume skill analysis, job matching and role roadmaps

use anyhow::{bail, Context};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use skillspark::catalog::Catalog;
use skillspark::cli::{self, Cli, Commands, ConfigAction};
use skillspark::config::{Config, OutputFormat};
use skillspark::input::upload::ResumeUpload;
use skillspark::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use skillspark::output::report::{JobMatchesReport, RoadmapView, UploadReport};
use skillspark::processing::job_matcher::JobFilter;
use skillspark::processing::role_inference::{resolve_role, RoleInference};
use skillspark::service::AnalysisClient;
use skillspark::session::StateStore;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> anyhow::Result<()> {
    let store = StateStore::new(config.state_dir());

    match command {
        Commands::Upload {
            file,
            select_first_role,
            output,
            save,
        } => {
            let format = output_format(output.as_deref(), &config)?;
            let upload = ResumeUpload::from_path(&file)
                .await
                .with_context(|| format!("Cannot upload {}", file.display()))?;

            let client = AnalysisClient::from_config(&config.service)?;
            println!("📄 Uploading {} to {}", upload.file_name, client.endpoint());

            let spinner = spinner("Analyzing resume...");
            let result = client.analyze(&upload).await;
            spinner.finish_and_clear();
            let analysis = result?;

            store
                .save_analysis(&analysis)
                .context("Failed to store the analysis result")?;
            info!("Analysis stored in {}", store.dir().display());

            let mut report = UploadReport::new(analysis);
            if select_first_role {
                match report.first_supported_role() {
                    Some(role) => {
                        store.save_selected_role(role)?;
                        report.selected_role = Some(role);
                    }
                    None => println!("⚠️  None of the suggested roles has a roadmap yet"),
                }
            }

            let generator = generator(&config, config.output.detailed);
            let content = generator.formatter(format).format_upload(&report)?;
            emit(&content, format, "resume_analysis", save)?;

            if format == OutputFormat::Console && report.selected_role.is_none() {
                println!("💡 Next: `skillspark jobs` or `skillspark select-role <role>`");
            }
        }

        Commands::SelectRole { role } => {
            let catalog = Catalog::builtin()?;
            match resolve_role(&role) {
                RoleInference::Supported(key) => {
                    store.save_selected_role(key)?;
                    let name = catalog
                        .role(key)
                        .map(|config| config.display_name.as_str())
                        .unwrap_or(key.as_str());
                    println!("✅ Selected role: {} ({})", name, key);

                    if !store.load_analysis().is_present() {
                        println!("💡 Upload your resume to see your roadmap");
                    }
                }
                RoleInference::Unsupported => {
                    println!("⚠️  Role not supported yet: {}", role);
                    println!("Run `skillspark roles` to see the roles with a roadmap");
                }
            }
        }

        Commands::Jobs {
            remote_only,
            min_match,
            detailed,
            output,
            save,
        } => {
            let format = output_format(output.as_deref(), &config)?;
            let catalog = Catalog::builtin()?;
            let session = store.load_analysis();
            let filter = JobFilter { remote_only, min_match };

            let report = JobMatchesReport::build(&session, &catalog, &filter);
            let generator = generator(&config, detailed || config.output.detailed);
            let content = generator.formatter(format).format_jobs(&report)?;
            emit(&content, format, "job_matches", save)?;
        }

        Commands::Roadmap { role, output, save } => {
            let format = output_format(output.as_deref(), &config)?;
            let catalog = Catalog::builtin()?;

            let selected = match role {
                Some(role) => match resolve_role(&role).role_key() {
                    Some(key) => Some(key),
                    None => bail!("Role not supported yet: {}", role),
                },
                None => store.load_selected_role(),
            };

            let view = RoadmapView::build(&store.load_analysis(), selected, &catalog);
            let generator = generator(&config, true);
            let content = generator.formatter(format).format_roadmap(&view)?;
            emit(&content, format, "roadmap", save)?;
        }

        Commands::Roles => {
            let catalog = Catalog::builtin()?;
            let selected = store.load_selected_role();

            println!("🧭 Roles with a roadmap\n");
            for role in catalog.roles() {
                let marker = if selected == Some(role.id) { "*" } else { " " };
                println!(
                    "{} {:<14} {} ({} core skills)",
                    marker,
                    role.id.as_str(),
                    role.display_name,
                    role.core_skills.len()
                );
            }
        }

        Commands::Clear => {
            store.clear()?;
            println!("🧹 Cleared stored analysis and role selection");
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Analysis Service: {}", config.service.base_url);
                println!("Request Timeout: {}s", config.service.timeout_secs);
                println!("State Directory: {}", config.state_dir().display());
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut updated = Config::load_file(config_path)?;
                updated
                    .set_value(&key, &value)
                    .with_context(|| format!("Cannot set {}", key))?;
                updated.save_to(config_path)?;
                println!("🔧 Set {} = {}", key, value);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn output_format(flag: Option<&str>, config: &Config) -> anyhow::Result<OutputFormat> {
    match flag {
        Some(value) => cli::parse_output_format(value).map_err(anyhow::Error::msg),
        None => Ok(config.output.format),
    }
}

fn generator(config: &Config, detailed: bool) -> ReportGenerator {
    ReportGenerator::with_options(config.output.color_output, detailed, true, true)
}

/// Print the report, or write it to `save`. A directory gets a timestamped file name.
fn emit(content: &str, format: OutputFormat, report_name: &str, save: Option<PathBuf>) -> anyhow::Result<()> {
    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(format, report_name, true))
            } else {
                path
            };
            save_report_to_file(content, &path)
                .with_context(|| format!("Failed to save report to {}", path.display()))?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
