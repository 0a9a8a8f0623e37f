use crate::ContactCommands;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new account and log into it
    Signup {
        email: String,
        password: String,
        /// Password confirmation (defaults to the password)
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Log into an existing account
    Login { email: String, password: String },

    /// Close the account's contacts and end the session
    Logout,

    /// Show whether someone is logged in
    Status,

    /// Show the stored password for an account
    ForgotPassword { email: String },

    /// Remove the logged-in account and all of its contacts
    DeleteAccount,

    /// Contact operations for the logged-in account
    Contact {
        #[command(subcommand)]
        action: ContactCommands,
    },
}
