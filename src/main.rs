use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Rates => fxconv::AppCommand::Rates,
            Commands::Convert { amount, from, to } => {
                fxconv::AppCommand::Convert { amount, from, to }
            }
            Commands::Shell => fxconv::AppCommand::Shell,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the exchange rate table
    Rates,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Source currency code (defaults to USD)
        from: Option<String>,
        /// Target currency code (defaults to INR)
        to: Option<String>,
    },
    /// Start the interactive converter
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup(),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
