//! addressbook - local address book CLI
//!
//! # Examples
//!
//! ```bash
//! addressbook signup a@b.com secret1
//! addressbook contact add "Ada Lovelace" ada@example.com 555-0100
//! addressbook contact list --pretty
//! ```

use ab_cli::{Cli, CliResult, Runner, logger};
use ab_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let mut config = Config::load()?;
    if let Some(dir) = cli.data_dir {
        let dir = std::path::absolute(&dir).unwrap_or(dir);
        config.storage.data_dir = dir.display().to_string();
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    Runner::from_config(&config)?.run(cli.command).await
}
