use chrono::{Datelike, Local};

use crate::cli::Args;
use crate::constants::{self, env_vars};
use crate::error::AppError;

pub mod env_file;
pub mod validation;

use env_file::EnvFile;
use validation::validate_config;

/// Credential resolved for the API, passed explicitly into the fetcher.
///
/// A direct bearer token (OAuth access token or a v1 API key) can be
/// used as-is; a client-credentials pair still needs to be exchanged for
/// a token at the OAuth endpoint before the first API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Token(String),
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
}

/// Resolved run configuration, consumed once by the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Community subdomain, used for the default output file name.
    pub community: String,
    /// Community identifier used in the tournament index URL.
    pub community_id: String,
    /// Year the export is filtered by.
    pub year: i32,
    /// Destination CSV path.
    pub output_path: String,
    /// API base URL. Overridable via CHALLONGE_API_BASE_URL.
    pub api_base_url: String,
    /// OAuth token endpoint. Overridable via CHALLONGE_OAUTH_TOKEN_URL.
    pub oauth_token_url: String,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
    /// Credential for the API.
    pub credentials: Credentials,
}

impl Config {
    /// Resolves the run configuration from CLI arguments, the process
    /// environment, and the env file named by `--env-file`.
    ///
    /// Precedence for every value is flag, then environment, then env
    /// file. No network call happens here; a client-credentials pair is
    /// carried as-is and exchanged later by the fetcher.
    ///
    /// # Errors
    /// * `AppError::Config` - no credential is resolvable from any source,
    ///   or a resolved value fails validation
    pub fn resolve(args: &Args) -> Result<Self, AppError> {
        let env_file = EnvFile::load(&args.env_file);
        let lookup = |key: &str| {
            std::env::var(key)
                .ok()
                .filter(|value| !value.is_empty())
                .or_else(|| env_file.get(key).map(str::to_string))
        };

        let credentials = resolve_credentials(args, &lookup)?;

        let community = args.community.clone();
        let community_id = args
            .community_id
            .clone()
            .or_else(|| lookup(env_vars::COMMUNITY_ID))
            .unwrap_or_else(|| community.clone());

        let year = args.year.unwrap_or_else(current_year);
        let output_path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&community, year));

        let api_base_url = lookup(env_vars::API_BASE_URL)
            .unwrap_or_else(|| constants::API_BASE_URL.to_string());
        let oauth_token_url = lookup(env_vars::OAUTH_TOKEN_URL)
            .unwrap_or_else(|| constants::OAUTH_TOKEN_URL.to_string());
        let http_timeout_seconds = lookup(env_vars::HTTP_TIMEOUT)
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(constants::DEFAULT_HTTP_TIMEOUT_SECONDS);

        validate_config(&community, &community_id, &output_path, &api_base_url)?;

        Ok(Config {
            community,
            community_id,
            year,
            output_path,
            api_base_url,
            oauth_token_url,
            http_timeout_seconds,
            credentials,
        })
    }
}

/// Default output file name for a community and year,
/// `tournaments_<community>_<year>.csv`.
pub fn default_output_path(community: &str, year: i32) -> String {
    format!("tournaments_{community}_{year}.csv")
}

fn current_year() -> i32 {
    Local::now().year()
}

/// Resolves the API credential in priority order: direct access token
/// (flag, then environment/env file), OAuth client-credentials pair,
/// then a plain API key.
fn resolve_credentials(
    args: &Args,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<Credentials, AppError> {
    if let Some(token) = args
        .access_token
        .clone()
        .filter(|token| !token.is_empty())
        .or_else(|| lookup(env_vars::ACCESS_TOKEN))
    {
        return Ok(Credentials::Token(token));
    }

    let client_id = args
        .client_id
        .clone()
        .filter(|id| !id.is_empty())
        .or_else(|| lookup(env_vars::CLIENT_ID));
    let client_secret = args
        .client_secret
        .clone()
        .filter(|secret| !secret.is_empty())
        .or_else(|| lookup(env_vars::CLIENT_SECRET));
    if let (Some(client_id), Some(client_secret)) = (client_id, client_secret) {
        return Ok(Credentials::ClientCredentials {
            client_id,
            client_secret,
        });
    }

    if let Some(api_key) = lookup(env_vars::API_KEY) {
        return Ok(Credentials::Token(api_key));
    }

    Err(AppError::config_error(
        "No Challonge credential found. Provide --access-token, CHALLONGE_ACCESS_TOKEN, \
         a client-credentials pair, or CHALLONGE_API_KEY via the environment or the env file.",
    ))
}
