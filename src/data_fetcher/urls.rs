//! URL building utilities for API endpoints

/// Builds the tournament index URL for one page of a community's
/// tournaments. The `state=all` filter matches every tournament
/// lifecycle state.
///
/// # Example
/// ```
/// use challonge_export::data_fetcher::urls::build_tournaments_url;
///
/// let url = build_tournaments_url("https://api.challonge.com/v2", "fabco", 1, 200);
/// assert_eq!(
///     url,
///     "https://api.challonge.com/v2/communities/fabco/tournaments?state=all&per_page=200&page=1"
/// );
/// ```
pub fn build_tournaments_url(
    api_base_url: &str,
    community_id: &str,
    page: u32,
    per_page: u32,
) -> String {
    format!(
        "{api_base_url}/communities/{community_id}/tournaments?state=all&per_page={per_page}&page={page}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tournaments_url_pages() {
        assert_eq!(
            build_tournaments_url("http://localhost:8080/v2", "12345", 3, 50),
            "http://localhost:8080/v2/communities/12345/tournaments?state=all&per_page=50&page=3"
        );
    }
}
