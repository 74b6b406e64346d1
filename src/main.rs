//! feature-planner - turn Q&A session records into implementation plans.
//!
//! Reads a requirements record captured while scoping a task and renders a
//! technical implementation plan from a markdown template.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use feature_planner::core::Config;
use feature_planner::plan::{plan_steps, PlanGenerator};
use feature_planner::session::{format_response_summary, load_record, SessionStore};

/// Generate implementation plans from Q&A requirements
#[derive(Parser)]
#[command(name = "feature-planner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an implementation plan from a requirements file
    Generate {
        /// Requirements file (YAML)
        record: PathBuf,

        /// Output file (defaults to plan.md or the configured default)
        output: Option<PathBuf>,

        /// Template file (defaults to the bundled technical plan template)
        template: Option<PathBuf>,
    },

    /// Save a requirements record, adding a timestamp if missing
    Save {
        /// Requirements file to read
        input: PathBuf,

        /// Directory to write requirements.yaml into
        /// (defaults to <plans_dir>/<task_name>)
        dir: Option<PathBuf>,
    },

    /// Show a summary of the Q&A responses in a requirements file
    Summary {
        /// Requirements file (YAML)
        record: PathBuf,
    },

    /// List the implementation steps planned for a requirements file
    Steps {
        /// Requirements file (YAML)
        record: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Generate { record, output, template } => {
            cmd_generate(&record, output, template)?;
        }
        Commands::Save { input, dir } => {
            cmd_save(&input, dir)?;
        }
        Commands::Summary { record } => {
            cmd_summary(&record)?;
        }
        Commands::Steps { record, format } => {
            cmd_steps(&record, &format)?;
        }
        Commands::Config { path } => {
            cmd_config(path)?;
        }
        Commands::Completions { shell } => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Generate a plan.
fn cmd_generate(record: &Path, output: Option<PathBuf>, template: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;

    let output = output.unwrap_or_else(|| PathBuf::from(&config.output.default_file));
    let template = template.or(config.template.path);

    let plan_file = PlanGenerator::new()
        .generate(record, &output, template.as_deref())
        .with_context(|| format!("Failed to generate plan from {}", record.display()))?;

    println!("Implementation plan generated: {}", plan_file.display());
    Ok(())
}

/// Save a record into its task directory.
fn cmd_save(input: &Path, dir: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let record = load_record(input)?;

    let dir = dir.unwrap_or_else(|| {
        config.task_dir(record.task_name.as_deref().unwrap_or("unnamed-task"))
    });

    let saved = SessionStore::new()
        .save(&record, &dir)
        .with_context(|| format!("Failed to save requirements to {}", dir.display()))?;

    println!("Requirements saved to: {}", saved.display());
    Ok(())
}

/// Print the Q&A summary.
fn cmd_summary(record: &Path) -> Result<()> {
    let record = load_record(record)?;
    println!("{}", format_response_summary(&record));
    Ok(())
}

/// Print the planned steps.
fn cmd_steps(record: &Path, format: &str) -> Result<()> {
    let record = load_record(record)?;
    let steps = plan_steps(&record);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&steps)?;
            println!("{json}");
        }
        _ => {
            for (i, step) in steps.iter().enumerate() {
                println!("{:>2}. {step}", i + 1);
            }
            println!("\nTotal: {} steps", steps.len());
        }
    }

    Ok(())
}

/// Show configuration.
fn cmd_config(show_path: bool) -> Result<()> {
    if show_path {
        if let Some(path) = Config::config_dir() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let config = Config::load()?;
    let toml = toml::to_string_pretty(&config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "feature-planner", &mut io::stdout());
}
