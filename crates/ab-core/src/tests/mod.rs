mod models;
mod naming;
