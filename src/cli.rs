use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::constants::DEFAULT_COMMUNITY;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Challonge Tournament Exporter
///
/// Downloads the tournaments of a Challonge community, keeps the ones
/// whose start (or creation) date falls in the requested year, and
/// writes them to a CSV file.
///
/// Credentials are resolved from flags, the process environment, or an
/// env file, in that order: a direct access token, an OAuth
/// client-credentials pair, or a CHALLONGE_API_KEY.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Challonge community subdomain to fetch tournaments for.
    #[arg(short = 'c', long, default_value = DEFAULT_COMMUNITY)]
    pub community: String,

    /// Challonge community identifier for the v2 API. Falls back to the
    /// CHALLONGE_COMMUNITY_ID environment variable, then to the
    /// community subdomain itself.
    #[arg(short = 'i', long = "community-id")]
    pub community_id: Option<String>,

    /// Year to filter tournaments by (based on start or creation date).
    /// Defaults to the current calendar year.
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Path to write CSV output (defaults to tournaments_<community>_<year>.csv).
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Optional path to an environment file supplying CHALLONGE_* credentials
    /// not already present in the process environment.
    #[arg(long = "env-file", default_value = ".env")]
    pub env_file: String,

    /// Direct OAuth access token to use for API calls. Falls back to the
    /// CHALLONGE_ACCESS_TOKEN environment variable.
    #[arg(long = "access-token", help_heading = "Credentials")]
    pub access_token: Option<String>,

    /// OAuth client identifier for the client-credentials exchange.
    /// Falls back to the CHALLONGE_CLIENT_ID environment variable.
    #[arg(long = "client-id", help_heading = "Credentials")]
    pub client_id: Option<String>,

    /// OAuth client secret for the client-credentials exchange.
    /// Falls back to the CHALLONGE_CLIENT_SECRET environment variable.
    #[arg(long = "client-secret", help_heading = "Credentials")]
    pub client_secret: Option<String>,

    /// Write logs to this file in addition to standard error.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["challonge_export"]);
        assert_eq!(args.community, "fabco");
        assert_eq!(args.community_id, None);
        assert_eq!(args.year, None);
        assert_eq!(args.output, None);
        assert_eq!(args.env_file, ".env");
        assert_eq!(args.access_token, None);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from([
            "challonge_export",
            "-c",
            "smashclub",
            "-y",
            "2023",
            "-o",
            "out.csv",
            "-i",
            "987654",
        ]);
        assert_eq!(args.community, "smashclub");
        assert_eq!(args.year, Some(2023));
        assert_eq!(args.output, Some("out.csv".to_string()));
        assert_eq!(args.community_id, Some("987654".to_string()));
    }

    #[test]
    fn test_credential_flags() {
        let args = Args::parse_from([
            "challonge_export",
            "--access-token",
            "tok-1",
            "--client-id",
            "cid",
            "--client-secret",
            "sec",
            "--env-file",
            "creds.env",
        ]);
        assert_eq!(args.access_token, Some("tok-1".to_string()));
        assert_eq!(args.client_id, Some("cid".to_string()));
        assert_eq!(args.client_secret, Some("sec".to_string()));
        assert_eq!(args.env_file, "creds.env");
    }
}
