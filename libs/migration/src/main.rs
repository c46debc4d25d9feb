//! Schema CLI for the catalog database.
//!
//! Reads `DATABASE_URL` and accepts the usual subcommands (`up`, `down`,
//! `status`, `fresh`, `refresh`, `reset`). The service itself applies pending
//! migrations on startup, so this is mostly for local resets.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
