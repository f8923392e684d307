use clap::Parser;
use tracing::info;

use challonge_export::cli::Args;
use challonge_export::config::Config;
use challonge_export::data_fetcher::{
    create_http_client_with_timeout, fetch_tournaments, resolve_access_token,
};
use challonge_export::error::AppError;
use challonge_export::exporter::export_tournaments;
use challonge_export::logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must be kept alive for the duration of the program
    // to ensure file logs are flushed properly
    let _guard = logging::setup_logging(args.log_file.as_deref())?;

    let config = Config::resolve(&args)?;
    info!(
        "Exporting {} tournaments for community {} to {}",
        config.year, config.community, config.output_path
    );

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let token = resolve_access_token(&client, &config).await?;
    let tournaments = fetch_tournaments(&client, &config, &token).await?;
    let written = export_tournaments(&tournaments, config.year, &config.output_path)?;

    println!("Exported {written} tournaments to {}", config.output_path);
    Ok(())
}
