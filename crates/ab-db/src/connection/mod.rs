pub mod account_databases;
