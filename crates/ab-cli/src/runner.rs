use crate::{CliError, CliResult, Commands, ContactCommands};

use ab_app::{AccountFlows, AddressViewModel, ContactEditor};
use ab_config::Config;

use serde_json::{Value, json};

/// Executes parsed commands against the flows and renders JSON.
pub struct Runner {
    flows: AccountFlows,
}

impl Runner {
    pub fn new(flows: AccountFlows) -> Self {
        Self { flows }
    }

    pub fn from_config(config: &Config) -> CliResult<Self> {
        Ok(Self::new(AccountFlows::from_config(config)?))
    }

    pub fn flows(&self) -> &AccountFlows {
        &self.flows
    }

    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Signup {
                email,
                password,
                confirm,
            } => {
                let confirm = confirm.unwrap_or_else(|| password.clone());
                let credentials = self.flows.signup(&email, &password, &confirm)?;
                Ok(json!({ "status": "signed_up", "email": credentials.email }))
            }
            Commands::Login { email, password } => {
                let credentials = self.flows.login(&email, &password)?;
                Ok(json!({ "status": "logged_in", "email": credentials.email }))
            }
            Commands::Logout => {
                self.flows.logout(None).await?;
                Ok(json!({ "status": "logged_out" }))
            }
            Commands::Status => Ok(serde_json::to_value(self.flows.launch()?)?),
            Commands::ForgotPassword { email } => {
                let password = self.flows.forgot_password(&email)?;
                Ok(json!({ "email": email.trim(), "password": password }))
            }
            Commands::DeleteAccount => {
                self.flows.delete_account().await?;
                Ok(json!({ "status": "deleted" }))
            }
            Commands::Contact { action } => {
                let contacts = self.flows.open_contacts().await?;
                let result = Self::run_contact(&contacts, action).await;
                contacts.close().await;
                result
            }
        }
    }

    async fn run_contact(contacts: &AddressViewModel, action: ContactCommands) -> CliResult<Value> {
        let editor = ContactEditor::new(contacts);

        match action {
            ContactCommands::List => {
                contacts.load_contacts().await?;
                let state = contacts.state();
                Ok(json!({ "view": state.view(), "contacts": state.contacts }))
            }
            ContactCommands::Get { id } => {
                let contact = contacts
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| CliError::contact_not_found(id))?;
                Ok(serde_json::to_value(contact)?)
            }
            ContactCommands::Add {
                name,
                email,
                phone_number,
            } => {
                let contact = editor.save(&name, &email, &phone_number).await?;
                Ok(serde_json::to_value(contact)?)
            }
            ContactCommands::Update {
                id,
                name,
                email,
                phone_number,
            } => {
                let original = contacts
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| CliError::contact_not_found(id))?;

                let name = name.unwrap_or_else(|| original.name.clone());
                let email = email.unwrap_or_else(|| original.email.clone());
                let phone_number = phone_number.unwrap_or_else(|| original.phone_number.clone());

                let updated = editor.update(&original, &name, &email, &phone_number).await?;
                Ok(serde_json::to_value(updated)?)
            }
            ContactCommands::Delete { id } => {
                let contact = contacts
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| CliError::contact_not_found(id))?;
                editor.delete(&contact).await?;
                Ok(json!({ "deleted": id }))
            }
            ContactCommands::Clear => {
                let removed = contacts.clear().await?;
                Ok(json!({ "deleted": removed }))
            }
        }
    }
}
