use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use mhforms_cli::commands::{self, EvidenceRequest};
use mhforms_cli::config;
use mhforms_narrative::pronouns::GenderContext;

#[derive(Parser)]
#[command(name = "mhforms", version, about = "Turn clinical notes into statutory form evidence")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract text, notes and patient details from a document as JSON.
    Ingest { file: PathBuf },
    /// Import a document and print the evidence collected for each section.
    Sections {
        file: PathBuf,
        #[arg(long, default_value = "tribunal_report")]
        form: String,
    },
    /// List diagnoses found in a document.
    Diagnoses {
        file: PathBuf,
        /// Only read text under a "Diagnosis:" header.
        #[arg(long)]
        headers_only: bool,
        #[arg(long, default_value_t = 3)]
        max: usize,
    },
    /// List the current medication regime found in a document.
    Medications {
        file: PathBuf,
        /// Lookback in months; defaults to the configured value.
        #[arg(long)]
        months: Option<u32>,
    },
    /// Render a narrative paragraph from an attributes JSON file.
    Narrative {
        attributes: PathBuf,
        #[arg(long, value_enum, default_value_t = GenderArg::Other)]
        gender: GenderArg,
        /// Document whose section evidence is appended to the narrative.
        #[arg(long)]
        evidence: Option<PathBuf>,
        #[arg(long, default_value = "tribunal_report")]
        form: String,
        #[arg(long, default_value = "risk_to_others")]
        section: String,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// List supported forms and their sections.
    Forms,
    /// Inspect or reset the local configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Path,
    Init,
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for GenderContext {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => GenderContext::Male,
            GenderArg::Female => GenderContext::Female,
            GenderArg::Other => GenderContext::Other,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::Ingest { file } => commands::cmd_ingest(file).await,
        Command::Sections { file, form } => commands::cmd_sections(file, &form, &cfg).await,
        Command::Diagnoses {
            file,
            headers_only,
            max,
        } => commands::cmd_diagnoses(file, headers_only, max).await,
        Command::Medications { file, months } => {
            commands::cmd_medications(file, months.unwrap_or(cfg.medication_lookback_months)).await
        }
        Command::Narrative {
            attributes,
            gender,
            evidence,
            form,
            section,
            limit,
        } => {
            let evidence = evidence.map(|document| EvidenceRequest {
                document,
                form_id: form,
                section_id: section,
                limit,
            });
            commands::cmd_narrative(&attributes, gender.into(), evidence, &cfg).await
        }
        Command::Forms => {
            commands::cmd_forms();
            Ok(())
        }
        Command::Config { action } => match action {
            ConfigAction::Show => commands::cmd_config_show(&cfg),
            ConfigAction::Path => {
                println!("{}", config::config_path()?.display());
                Ok(())
            }
            ConfigAction::Init => commands::cmd_config_init(),
            ConfigAction::Reset => commands::cmd_config_reset(),
        },
    }
}
