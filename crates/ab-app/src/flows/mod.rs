pub mod account_flows;
pub mod contact_editor;
pub mod launch_outcome;
