use crate::error::AppError;

/// Validates the resolved configuration values
///
/// # Validation Rules
/// - Community subdomain cannot be empty or contain whitespace
/// - Community identifier cannot be empty
/// - Output path cannot be empty
/// - API base URL must start with http:// or https://
pub fn validate_config(
    community: &str,
    community_id: &str,
    output_path: &str,
    api_base_url: &str,
) -> Result<(), AppError> {
    if community.is_empty() {
        return Err(AppError::config_error("Community cannot be empty"));
    }
    if community.chars().any(char::is_whitespace) {
        return Err(AppError::config_error(
            "Community must be a subdomain without whitespace",
        ));
    }

    if community_id.is_empty() {
        return Err(AppError::config_error("Community identifier cannot be empty"));
    }

    if output_path.is_empty() {
        return Err(AppError::config_error("Output path cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(
            validate_config(
                "fabco",
                "fabco",
                "tournaments_fabco_2024.csv",
                "https://api.challonge.com/v2"
            )
            .is_ok()
        );
    }

    #[test]
    fn test_empty_community_rejected() {
        let result = validate_config("", "id", "out.csv", "https://api.challonge.com/v2");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_whitespace_community_rejected() {
        let result = validate_config("fab co", "id", "out.csv", "https://api.challonge.com/v2");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_empty_output_rejected() {
        let result = validate_config("fabco", "fabco", "", "https://api.challonge.com/v2");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = validate_config("fabco", "fabco", "out.csv", "api.challonge.com");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
