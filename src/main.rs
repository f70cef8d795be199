use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "phpstan-lint")]
#[command(about = "Build PHPStan invocations for editor lint frameworks")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the PHPStan command for a file as JSON (empty array = skip)
    Cmd {
        /// Absolute path of the file being linted
        file: PathBuf,

        /// Linter settings file (TOML)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Extra analyzer argument, appended to the settings' args
        #[arg(long = "arg", allow_hyphen_values = true)]
        args: Vec<String>,

        /// Do not inject the Composer autoloader
        #[arg(long)]
        no_composer_autoload: bool,

        /// Substitute ${args} and ${file} instead of printing the template
        #[arg(long)]
        expand: bool,
    },

    /// Show the project configuration that applies to a file
    Inspect {
        /// Absolute path of the file being linted
        file: PathBuf,
    },

    /// Turn raw PHPStan output into JSON diagnostics, one per line
    Parse {
        /// Read output from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr keeps stdout machine readable)
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Cmd {
            file,
            settings,
            args,
            no_composer_autoload,
            expand,
        } => {
            let options = cli::cmd::CmdOptions {
                settings,
                extra_args: args,
                no_composer_autoload,
                expand,
            };
            cli::cmd::cmd_command(&file, options)?;
        }
        Commands::Inspect { file } => {
            cli::inspect::inspect_command(&file)?;
        }
        Commands::Parse { input } => {
            cli::parse::parse_command(input.as_deref())?;
        }
    }

    Ok(())
}
