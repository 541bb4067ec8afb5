//! Command-line interface for the API server binary.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::api::Config;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "contacts.db";

#[derive(Parser, Debug)]
#[command(name = "contacts-api")]
#[command(author, version, about = "Contacts API server", long_about = None)]
pub struct Cli {
    /// Host address to bind to
    #[arg(long, env = "CONTACTS_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CONTACTS_PORT", default_value = "3000")]
    pub port: u16,

    /// SQLite database file (created if missing)
    #[arg(long, env = "CONTACTS_DB", default_value = DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Serve OpenAPI docs at /docs
    #[arg(long, env = "CONTACTS_DOCS")]
    pub docs: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Server configuration derived from the parsed flags.
    pub fn config(&self) -> Config {
        Config {
            host: self.host,
            port: self.port,
            verbosity: self.verbose,
            enable_docs: self.docs,
        }
    }
}
