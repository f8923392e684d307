//! Tournament fetching: HTTP client setup, API models, URL builders and
//! the paginated index walk.

pub mod api;
pub mod http_client;
pub mod models;
pub mod urls;

pub use api::{fetch_tournaments, resolve_access_token};
pub use http_client::create_http_client_with_timeout;
pub use models::TournamentRecord;
