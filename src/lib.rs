pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::{RateTable, Session};
use anyhow::Result;
use tracing::{debug, info};

/// Commands that run against the built-in rate table.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Rates,
    Convert {
        amount: String,
        from: Option<String>,
        to: Option<String>,
    },
    Shell,
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");
    let config = load_config(config_path)?;
    let table = RateTable::default();

    match command {
        AppCommand::Rates => {
            cli::rates::run(&table);
            Ok(())
        }
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&table, &amount, from.as_deref(), to.as_deref())
        }
        AppCommand::Shell => {
            let mut session = Session::new(table);
            cli::shell::run(&mut session, &config)
        }
    }
}
