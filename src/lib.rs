//! # Agrovista - Farm Management API Client
//!
//! Agrovista is the client-side data-access layer for a farm-management
//! backend speaking HTTP/JSON. It provides:
//!
//! - **API operations**: login, parcel listing, parcel detail
//! - **Tolerant decoding**: loosely-typed server JSON into domain records
//! - **Transport**: timeouts, status handling, error normalization
//! - **Outcomes**: one success/failure result type for every operation
//!
//! ## Quick Start
//!
//! ```no_run
//! use agrovista::{ApiClient, ApiConfig, Outcome};
//!
//! # async fn example() {
//! let config = ApiConfig::new("https://agrovista.example.com/api");
//! let client = ApiClient::new(&config);
//!
//! match client.login("aruiz", "secreto").await {
//!     Outcome::Success(usuario) => println!("Hola, {}", usuario.nombre_completo()),
//!     Outcome::Failure(mensaje) => eprintln!("{mensaje}"),
//! }
//!
//! match client.fincas(1).await {
//!     Outcome::Success(fincas) => println!("{} fincas", fincas.len()),
//!     Outcome::Failure(mensaje) => eprintln!("{mensaje}"),
//! }
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | The three API operations |
//! | [`decode`] | Tolerant JSON-to-record decoding |
//! | [`transport`] | HTTP transport and response normalization |
//! | [`model`] | Domain records (usuarios, fincas, cultivos) |
//! | [`outcome`] | The success/failure result type |
//! | [`error`] | Error types for non-Outcome surfaces |
//!
//! ## Calling from a UI
//!
//! Operations are stateless `async fn`s that may run for seconds (network
//! plus timeouts). Await them on a worker context, marshal the returned
//! [`Outcome`] to your interaction thread yourself, and keep at most one
//! call in flight per screen. Dropping the future abandons the request.

pub mod api;
pub mod decode;
pub mod error;
pub mod model;
pub mod outcome;
pub mod transport;

// Re-exports for convenience
pub use api::ApiClient;
pub use error::AgrovistaError;
pub use outcome::Outcome;
pub use transport::ApiConfig;
