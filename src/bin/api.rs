//! Contacts API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use clap::Parser;
use contacts::api::{self, ServerError};
use contacts::cli::Cli;
use contacts::db::{Database, DbError, SqliteDatabase};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(contacts::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(contacts::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(contacts::binary::api))]
    Api(#[from] ServerError),
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    serve(Cli::parse()).await?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    // Ensure parent directory exists
    if let Some(parent) = cli.db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    println!("Opening database at {}", cli.db.display());
    let db = SqliteDatabase::open(&cli.db).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    println!("Database migrations complete");

    // Pass the abstract Database to the API layer
    api::run(cli.config(), db).await?;

    Ok(())
}
