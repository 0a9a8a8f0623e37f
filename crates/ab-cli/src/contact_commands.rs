use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// List contacts ordered by name
    List,
    /// Get a contact by ID
    Get { id: i64 },
    /// Add a contact
    Add {
        name: String,
        email: String,
        phone_number: String,
    },
    /// Update a contact; omitted fields keep their value
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
    },
    /// Delete a contact by ID
    Delete { id: i64 },
    /// Delete every contact
    Clear,
}
