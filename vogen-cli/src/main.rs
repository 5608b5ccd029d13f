//! # vogen
//!
//! CLI tool for generating immutable Go value objects.
//!
//! ## Usage
//!
//! ```bash
//! # Create a starter vogen.toml
//! vogen init
//!
//! # Generate the Go file described by vogen.toml
//! vogen generate
//!
//! # Override the output path and package
//! vogen generate --output ./domain/vo.go --package domain
//!
//! # Preview without writing
//! vogen generate --dry-run
//!
//! # Check the generated file is up to date (exit code 2 when stale)
//! vogen validate
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use vogen::WriteResult;
use vogen_cli::{
    config::{CliArgs, ConfigManager},
    error::CliError,
    generator::ValueObjectGenerator,
    logging::init_logging,
};

#[derive(Parser)]
#[command(name = "vogen")]
#[command(author, version, about = "Generate immutable Go value objects", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Go source file from a definition file
    Generate {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package name of the generated file
        #[arg(short, long)]
        package: Option<String>,

        /// Skip the configured formatter
        #[arg(long)]
        no_format: bool,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Initialize a new vogen configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "vogen.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that the generated file is up-to-date
    Validate {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            config,
            output,
            package,
            no_format,
            dry_run,
        } => cmd_generate(
            config,
            CliArgs {
                output,
                package,
                no_format,
            },
            dry_run,
        ),

        Commands::Init { output, force } => cmd_init(output, force),

        Commands::Validate { config } => cmd_validate(config),
    }
}

/// Generate command implementation.
fn cmd_generate(
    config_path: Option<PathBuf>,
    args: CliArgs,
    dry_run: bool,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(config, &args);

    if config.value_objects.is_empty() {
        println!("{}", "No value objects defined.".yellow());
    } else {
        println!(
            "{} {} value object(s)...",
            "Generating".cyan(),
            config.value_objects.len().to_string().green()
        );
    }

    let generator = ValueObjectGenerator::new(config);

    match generator.generate(dry_run)? {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            println!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(format!(
            "Configuration file already exists: {}",
            output.display()
        )));
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(config_path: Option<PathBuf>) -> Result<(), CliError> {
    println!("{}", "Validating generated file...".cyan());

    let config = ConfigManager::load(config_path.as_deref())?;
    let generator = ValueObjectGenerator::new(config);

    match generator.validate() {
        Ok(()) => {
            println!("{} Generated file is up-to-date", "✓".green());
            Ok(())
        }
        Err(e @ CliError::Validation(_)) => {
            println!("{} Generated file is out of date", "✗".red());
            println!("  Run 'vogen generate' to update");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
