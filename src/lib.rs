//! Challonge Tournament Exporter Library
//!
//! This library fetches the tournaments of a Challonge community,
//! filters them by calendar year, and writes the result to a CSV file.
//!
//! # Examples
//!
//! ```rust,no_run
//! use challonge_export::config::{Config, Credentials};
//! use challonge_export::data_fetcher::{
//!     create_http_client_with_timeout, fetch_tournaments, resolve_access_token,
//! };
//! use challonge_export::error::AppError;
//! use challonge_export::exporter::export_tournaments;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config {
//!         community: "fabco".to_string(),
//!         community_id: "fabco".to_string(),
//!         year: 2024,
//!         output_path: "tournaments_fabco_2024.csv".to_string(),
//!         api_base_url: "https://api.challonge.com/v2".to_string(),
//!         oauth_token_url: "https://api.challonge.com/oauth/token".to_string(),
//!         http_timeout_seconds: 30,
//!         credentials: Credentials::Token("my-api-key".to_string()),
//!     };
//!
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!     let token = resolve_access_token(&client, &config).await?;
//!     let tournaments = fetch_tournaments(&client, &config, &token).await?;
//!     let written = export_tournaments(&tournaments, config.year, &config.output_path)?;
//!
//!     println!("Exported {written} tournaments to {}", config.output_path);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod exporter;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::{Config, Credentials, default_output_path};
pub use data_fetcher::{TournamentRecord, fetch_tournaments, resolve_access_token};
pub use error::AppError;
pub use exporter::export_tournaments;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
