use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};

use crate::config::{Config, Credentials};
use crate::constants::DEFAULT_PER_PAGE;
use crate::data_fetcher::models::{
    PageLinks, PageMeta, TokenResponse, TournamentIndexResponse, TournamentRecord,
};
use crate::data_fetcher::urls::build_tournaments_url;
use crate::error::AppError;

/// Fetches every tournament of the configured community, following the
/// API's own pagination signals until no further page is indicated.
///
/// Records accumulate in API order across pages; no year filtering
/// happens here. The credential must already be a usable bearer token
/// (see [`resolve_access_token`]).
///
/// # Errors
/// * `AppError::AuthRejected` - the API answered 401/403
/// * `AppError::NetworkTimeout` / `NetworkConnection` - transport failure
/// * other `Api*` variants - non-success status or unusable body
#[instrument(skip(client, config, token))]
pub async fn fetch_tournaments(
    client: &Client,
    config: &Config,
    token: &str,
) -> Result<Vec<TournamentRecord>, AppError> {
    info!(
        "Fetching tournaments for community {} (id {})",
        config.community, config.community_id
    );

    let mut records = Vec::new();
    let mut page: u32 = 1;
    loop {
        let url = build_tournaments_url(
            &config.api_base_url,
            &config.community_id,
            page,
            DEFAULT_PER_PAGE,
        );
        let TournamentIndexResponse { data, meta, links } = fetch(client, &url, token).await?;
        debug!("Page {} returned {} tournaments", page, data.len());

        for resource in data {
            if let Some(record) = TournamentRecord::from_resource(resource) {
                records.push(record);
            }
        }

        match next_page_number(meta.as_ref(), links.as_ref(), page) {
            Some(next) if next > page => page = next,
            Some(next) => {
                warn!("Pagination did not advance (current {page}, next {next}), stopping");
                break;
            }
            None => break,
        }
    }

    info!("Fetched {} tournaments in total", records.len());
    Ok(records)
}

/// Turns the resolved credential into a bearer token, exchanging a
/// client-credentials pair at the OAuth endpoint when needed.
pub async fn resolve_access_token(client: &Client, config: &Config) -> Result<String, AppError> {
    match &config.credentials {
        Credentials::Token(token) => Ok(token.clone()),
        Credentials::ClientCredentials {
            client_id,
            client_secret,
        } => request_access_token(client, &config.oauth_token_url, client_id, client_secret).await,
    }
}

/// Exchanges OAuth client credentials for an access token.
#[instrument(skip(client, client_secret))]
pub async fn request_access_token(
    client: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, AppError> {
    info!("Requesting OAuth access token for client {client_id}");

    let response = client
        .post(token_url)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])
        .send()
        .await
        .map_err(|e| transport_error(e, token_url))?;

    let status = response.status();
    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("Token exchange failed: HTTP {} - {}", status.as_u16(), reason);
        return Err(status_error(status.as_u16(), reason, token_url));
    }

    let token_response: TokenResponse = response.json().await.map_err(AppError::ApiFetch)?;
    token_response
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::oauth_token_error("response missing access_token"))
}

/// Computes the next page to fetch from the response's pagination
/// signals: an explicit `meta.next_page`, or the page after
/// `meta.current_page` while a `links.next` entry is present, capped by
/// `meta.total_pages`.
fn next_page_number(
    meta: Option<&PageMeta>,
    links: Option<&PageLinks>,
    current_page: u32,
) -> Option<u32> {
    let has_next_link = links.and_then(|links| links.next.as_ref()).is_some();
    let meta_current = meta
        .and_then(|meta| meta.current_page)
        .unwrap_or(current_page);

    let next = meta
        .and_then(|meta| meta.next_page)
        .or_else(|| has_next_link.then_some(meta_current + 1))?;

    match meta.and_then(|meta| meta.total_pages) {
        Some(total_pages) if next > total_pages => None,
        _ => Some(next),
    }
}

/// Issues one authenticated GET and deserializes the JSON body,
/// classifying failures into the crate error taxonomy. No retries: a
/// transient failure aborts the run.
async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: &str,
) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| {
            error!("Request failed for URL {}: {}", url, e);
            transport_error(e, url)
        })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(status_error(status_code, reason, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };
    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

fn transport_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        401 | 403 => AppError::auth_rejected(status_code, reason, url),
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}
