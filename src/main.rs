//! Resume extractor: LLM-assisted structured data extraction from resumes

use clap::Parser;
use log::{error, info};
use resume_extractor::cli::{self, Cli, Commands, ConfigAction};
use resume_extractor::config::{ApiCredentials, Config, OutputFormat};
use resume_extractor::error::{Result, ResumeParserError};
use resume_extractor::extract::{CohereClient, ResumeParser};
use resume_extractor::input::InputManager;
use resume_extractor::output::{
    ConsoleFormatter, CsvFormatter, Exporter, JsonFormatter, RecordFormatter,
};
use resume_extractor::processing::TextCleaner;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
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

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse {
            resume,
            output,
            save,
            no_backfill,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md", "markdown"])
                .map_err(|e| ResumeParserError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeParserError::InvalidInput)?;

            // credential check happens before any file or network work
            let credentials = ApiCredentials::from_env()?;

            info!("Parsing resume: {}", resume.display());

            let raw_text = InputManager::new().extract_text(&resume).await?;
            let cleaned = TextCleaner::new(&config.processing).clean(&raw_text)?;

            if cleaned.is_empty() {
                return Err(ResumeParserError::InvalidInput(format!(
                    "No text content found in {}",
                    resume.display()
                )));
            }

            let client = CohereClient::new(credentials, config.api.clone());
            let parser = ResumeParser::new(Box::new(client))
                .with_contact_backfill(config.processing.enable_contact_backfill && !no_backfill);

            let record = parser.parse(&cleaned).await?;

            if let Some(path) = save {
                Exporter::new(config.output.export_dir.clone()).export_to(&record, &path)?;
                println!("Saved parsed resume to {}", path.display());
                return Ok(());
            }

            let rendered = match output_format {
                OutputFormat::Console => {
                    ConsoleFormatter::new(config.output.color_output).format_record(&record)?
                }
                OutputFormat::Json => JsonFormatter.format_record(&record)?,
                OutputFormat::Csv => CsvFormatter.format_record(&record)?,
            };
            println!("{}", rendered);
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeParserError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                let fresh = Config::default();
                fresh.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}
