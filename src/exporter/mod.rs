//! CSV export: year filtering and file writing.

use chrono::{DateTime, SecondsFormat, Utc};
use csv::Writer;
use std::fs::File;
use tracing::{info, instrument};

use crate::constants::csv_format;
use crate::data_fetcher::models::TournamentRecord;
use crate::error::AppError;

/// Writes the records whose effective date falls in `year` to a CSV
/// file at `output_path`, creating or truncating the file.
///
/// The header row is fixed (see [`csv_format::HEADER`]); every row
/// carries every column, with an empty field for a missing start time.
/// Returns the number of data rows written.
///
/// # Errors
/// * `AppError::Io` - the path is unwritable (missing parent directory,
///   permission denied)
/// * `AppError::Csv` - a row failed to serialize
#[instrument(skip(records))]
pub fn export_tournaments(
    records: &[TournamentRecord],
    year: i32,
    output_path: &str,
) -> Result<usize, AppError> {
    let file = File::create(output_path)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(csv_format::HEADER)?;

    let mut written = 0usize;
    for record in records.iter().filter(|record| record.is_in_year(year)) {
        let participants_count = record.participants_count.to_string();
        let started_at = record
            .started_at
            .map(|timestamp| format_timestamp(&timestamp))
            .unwrap_or_default();
        let created_at = format_timestamp(&record.created_at);
        writer.write_record([
            record.id.as_str(),
            record.name.as_str(),
            record.url.as_str(),
            record.state.as_str(),
            participants_count.as_str(),
            started_at.as_str(),
            created_at.as_str(),
        ])?;
        written += 1;
    }
    writer.flush()?;

    info!("Wrote {} data rows to {}", written, output_path);
    Ok(written)
}

/// Serializes a timestamp as RFC 3339 with second precision and a `Z`
/// suffix, e.g. `2024-01-15T18:30:00Z`.
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}
