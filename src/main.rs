//! # Agrovista CLI
//!
//! Thin command-line front end for the data-access layer. This is the
//! "presentation" collaborator: it passes parameters in, prints the success
//! value as JSON, and shows the failure message on stderr.
//!
//! ## Usage
//!
//! ```bash
//! # Authenticate
//! agrovista --base-url https://agrovista.example.com/api login aruiz secreto
//!
//! # List a user's parcels
//! agrovista --base-url https://agrovista.example.com/api fincas 1
//!
//! # Show one parcel with its crops
//! agrovista --base-url https://agrovista.example.com/api detalle 4 1
//! ```

use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;

use agrovista::{AgrovistaError, ApiClient, ApiConfig, Outcome};

/// Agrovista - farm management client utility
#[derive(Parser, Debug)]
#[command(name = "agrovista")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the backend, e.g. https://agrovista.example.com/api
    #[arg(long)]
    base_url: String,

    /// Read timeout in seconds (connect timeout stays at its default)
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Authenticate and print the user record
    Login { usuario: String, password: String },

    /// List the parcels managed by a user
    Fincas { usuario_id: i64 },

    /// Show one parcel's detail, including crops
    Detalle { finca_id: i64, usuario_id: i64 },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AgrovistaError> {
    let cli = Cli::parse();

    let mut config = ApiConfig::new(cli.base_url);
    if let Some(seconds) = cli.timeout {
        config.read_timeout = Duration::from_secs(seconds);
    }
    let client = ApiClient::new(&config);

    match cli.command {
        Commands::Login { usuario, password } => {
            print_outcome(client.login(&usuario, &password).await)
        }
        Commands::Fincas { usuario_id } => print_outcome(client.fincas(usuario_id).await),
        Commands::Detalle {
            finca_id,
            usuario_id,
        } => print_outcome(client.finca_detalle(finca_id, usuario_id).await),
    }
}

fn print_outcome<T: Serialize>(outcome: Outcome<T>) -> Result<(), AgrovistaError> {
    match outcome {
        Outcome::Success(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Outcome::Failure(message) => Err(AgrovistaError::Operation(message)),
    }
}
