//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers, endpoint addresses and
//! environment variable names used across the crate.

/// Base URL of the Challonge v2 API
pub const API_BASE_URL: &str = "https://api.challonge.com/v2";

/// OAuth token endpoint used for the client-credentials exchange
pub const OAUTH_TOKEN_URL: &str = "https://api.challonge.com/oauth/token";

/// Community subdomain used when none is given on the command line
pub const DEFAULT_COMMUNITY: &str = "fabco";

/// Page size requested from the tournament index endpoint
pub const DEFAULT_PER_PAGE: u32 = 200;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// User-Agent header sent with every API request
pub const USER_AGENT: &str = concat!("challonge_export/", env!("CARGO_PKG_VERSION"));

/// Environment variable names
pub mod env_vars {
    /// Direct OAuth access token
    pub const ACCESS_TOKEN: &str = "CHALLONGE_ACCESS_TOKEN";

    /// OAuth client identifier for the client-credentials exchange
    pub const CLIENT_ID: &str = "CHALLONGE_CLIENT_ID";

    /// OAuth client secret for the client-credentials exchange
    pub const CLIENT_SECRET: &str = "CHALLONGE_CLIENT_SECRET";

    /// v1-style API key, accepted as a bearer credential of last resort
    pub const API_KEY: &str = "CHALLONGE_API_KEY";

    /// Community identifier for the v2 API
    pub const COMMUNITY_ID: &str = "CHALLONGE_COMMUNITY_ID";

    /// Environment variable for API base URL override
    pub const API_BASE_URL: &str = "CHALLONGE_API_BASE_URL";

    /// Environment variable for OAuth token endpoint override
    pub const OAUTH_TOKEN_URL: &str = "CHALLONGE_OAUTH_TOKEN_URL";

    /// Environment variable for HTTP timeout in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "CHALLONGE_HTTP_TIMEOUT";
}

/// CSV output format
pub mod csv_format {
    /// Column order of the exported file. Every row carries every
    /// column; a missing start time serializes as an empty field.
    pub const HEADER: [&str; 7] = [
        "id",
        "name",
        "url",
        "state",
        "participants_count",
        "started_at",
        "created_at",
    ];
}
