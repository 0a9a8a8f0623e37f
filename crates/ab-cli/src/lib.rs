//! ab-cli library
//!
//! Argument types, the command runner and the logger behind the
//! `addressbook` binary.

pub mod cli;
pub mod commands;
pub mod contact_commands;
pub mod error;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use contact_commands::ContactCommands;
pub use error::{CliError, CliResult};
pub use runner::Runner;
