//! Resume match: deterministic resume and job posting compatibility scoring

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{ResumeMatchError, Result};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::ScoreReport;
use processing::analyzer::MatchEngine;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path.clone()),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume match analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeMatchError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ResumeMatchError::InvalidInput(format!("Job posting file: {}", e)))?;

            let output_format = match &output {
                Some(format) => {
                    cli::parse_output_format(format).map_err(ResumeMatchError::InvalidInput)?
                }
                None => config.output.format,
            };

            let mut input_manager =
                InputManager::new().with_cache(config.input.enable_caching);

            info!("Extracting resume text from {}", resume.display());
            let resume_text = input_manager.extract_text(&resume).await?;

            info!("Extracting job posting text from {}", job.display());
            let job_text = input_manager.extract_text(&job).await?;

            // The engine is total over any input, but scoring a blank
            // document is meaningless to the user; reject it up front.
            if resume_text.trim().is_empty() {
                return Err(ResumeMatchError::InvalidInput(format!(
                    "Resume file is empty: {}",
                    resume.display()
                )));
            }
            if job_text.trim().is_empty() {
                return Err(ResumeMatchError::InvalidInput(format!(
                    "Job posting file is empty: {}",
                    job.display()
                )));
            }

            info!(
                "Scoring {} resume characters against {} job characters",
                resume_text.len(),
                job_text.len()
            );

            let engine = MatchEngine::new();
            let analysis = engine.analyze(&resume_text, &job_text);

            let report = ScoreReport::new(
                analysis,
                &resume_text,
                &job_text,
                &resume.to_string_lossy(),
                &job.to_string_lossy(),
            );

            let generator = ReportGenerator::new(
                config.output.color_output,
                detailed || config.output.detailed,
                config.output.include_improvements,
            );
            let rendered = generator.format(&report, output_format)?;

            println!("{}", rendered);

            if let Some(save_path) = save {
                generator.save_to_file(&rendered, &save_path)?;
                println!("💾 Report saved to {}", save_path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Input caching: {}", config.input.enable_caching);
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
                println!(
                    "Include improvements: {}",
                    config.output.include_improvements
                );
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
