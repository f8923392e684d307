use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One remote tournament, flattened from the API resource shape.
///
/// Constructed once per API item, filtered by year, then either written
/// as one CSV row or discarded. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub state: String,
    pub participants_count: u32,
    pub started_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TournamentRecord {
    /// Flattens one API resource into a record.
    ///
    /// Timestamps may live at the top of `attributes` or nested under
    /// `attributes.timestamps`; the participant count falls back to the
    /// participants relationship when the attribute is absent. Returns
    /// `None` (with a warning) for resources without a usable creation
    /// timestamp, mirroring how undated entries can never match a year
    /// filter anyway.
    pub fn from_resource(resource: TournamentResource) -> Option<Self> {
        let TournamentResource {
            id,
            attributes,
            relationships,
        } = resource;

        let timestamps = attributes.timestamps.unwrap_or_default();
        let created_raw = attributes.created_at.or(timestamps.created_at);
        let started_raw = attributes
            .started_at
            .or(attributes.starts_at)
            .or(timestamps.started_at)
            .or(timestamps.starts_at);

        let Some(created_at) = created_raw.as_deref().and_then(parse_datetime) else {
            warn!("Skipping tournament {id}: no parseable creation timestamp");
            return None;
        };
        let started_at = started_raw.as_deref().and_then(parse_datetime);

        let participants_count = attributes
            .participants_count
            .or_else(|| participants_count_from_relationships(relationships.as_ref()))
            .unwrap_or(0);

        Some(TournamentRecord {
            id,
            name: attributes.name.unwrap_or_default(),
            url: attributes
                .full_challonge_url
                .or(attributes.url)
                .unwrap_or_default(),
            state: attributes.state.unwrap_or_default(),
            participants_count,
            started_at,
            created_at,
        })
    }

    /// The date used for year filtering: start time, falling back to
    /// creation time.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.started_at.unwrap_or(self.created_at)
    }

    /// Whether the effective date falls in the given calendar year.
    pub fn is_in_year(&self, year: i32) -> bool {
        self.effective_date().year() == year
    }
}

/// Parses an RFC 3339 / ISO-8601 timestamp, returning `None` on failure.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            warn!("Unparseable timestamp '{raw}': {e}");
            None
        }
    }
}

fn participants_count_from_relationships(relationships: Option<&Relationships>) -> Option<u32> {
    let participants = relationships?.participants.as_ref()?;
    participants
        .count
        .or_else(|| participants.meta.as_ref().and_then(|meta| meta.count))
        .or_else(|| {
            participants
                .links
                .as_ref()
                .and_then(|links| links.meta.as_ref())
                .and_then(|meta| meta.count)
        })
}

/// One page of the tournament index endpoint (JSON:API document).
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentIndexResponse {
    #[serde(default)]
    pub data: Vec<TournamentResource>,
    #[serde(default)]
    pub meta: Option<PageMeta>,
    #[serde(default)]
    pub links: Option<PageLinks>,
}

/// One `data` item: id plus nested attributes and relationships.
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentResource {
    pub id: String,
    #[serde(default)]
    pub attributes: TournamentAttributes,
    #[serde(default)]
    pub relationships: Option<Relationships>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TournamentAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub full_challonge_url: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub participants_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub timestamps: Option<Timestamps>,
}

/// Nested timestamp block some API responses carry instead of top-level
/// timestamp attributes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Timestamps {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub starts_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationships {
    #[serde(default)]
    pub participants: Option<ParticipantsRelationship>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParticipantsRelationship {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub meta: Option<CountMeta>,
    #[serde(default)]
    pub links: Option<ParticipantsLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParticipantsLinks {
    #[serde(default)]
    pub meta: Option<CountMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountMeta {
    #[serde(default)]
    pub count: Option<u32>,
}

/// Pagination counters of the index response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
}

/// Response of the OAuth client-credentials exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn resource_from_json(json: &str) -> TournamentResource {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_from_resource_full_attributes() {
        let resource = resource_from_json(
            r#"{
                "id": "tour-1",
                "type": "tournament",
                "attributes": {
                    "name": "Winter Open",
                    "url": "winter-open",
                    "full_challonge_url": "https://fabco.challonge.com/winter-open",
                    "state": "complete",
                    "participants_count": 16,
                    "created_at": "2024-01-10T12:00:00Z",
                    "started_at": "2024-01-15T18:30:00Z"
                }
            }"#,
        );

        let record = TournamentRecord::from_resource(resource).unwrap();
        assert_eq!(record.id, "tour-1");
        assert_eq!(record.name, "Winter Open");
        assert_eq!(record.url, "https://fabco.challonge.com/winter-open");
        assert_eq!(record.state, "complete");
        assert_eq!(record.participants_count, 16);
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
        );
        assert_eq!(
            record.started_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 18, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_from_resource_nested_timestamps() {
        let resource = resource_from_json(
            r#"{
                "id": "tour-2",
                "attributes": {
                    "name": "Spring Cup",
                    "state": "pending",
                    "timestamps": {
                        "created_at": "2023-03-01T09:00:00Z",
                        "starts_at": "2023-04-01T10:00:00Z"
                    }
                }
            }"#,
        );

        let record = TournamentRecord::from_resource(resource).unwrap();
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2023, 3, 1, 9, 0, 0).unwrap()
        );
        assert_eq!(
            record.started_at,
            Some(Utc.with_ymd_and_hms(2023, 4, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_from_resource_top_level_timestamp_wins() {
        let resource = resource_from_json(
            r#"{
                "id": "tour-3",
                "attributes": {
                    "created_at": "2024-06-01T00:00:00Z",
                    "timestamps": { "created_at": "2020-01-01T00:00:00Z" }
                }
            }"#,
        );

        let record = TournamentRecord::from_resource(resource).unwrap();
        assert_eq!(record.created_at.year(), 2024);
    }

    #[test]
    fn test_from_resource_participants_count_from_relationships() {
        let resource = resource_from_json(
            r#"{
                "id": "tour-4",
                "attributes": { "created_at": "2024-02-01T00:00:00Z" },
                "relationships": {
                    "participants": { "meta": { "count": 12 } }
                }
            }"#,
        );
        assert_eq!(
            TournamentRecord::from_resource(resource)
                .unwrap()
                .participants_count,
            12
        );

        let resource = resource_from_json(
            r#"{
                "id": "tour-5",
                "attributes": { "created_at": "2024-02-01T00:00:00Z" },
                "relationships": {
                    "participants": { "links": { "meta": { "count": 7 } } }
                }
            }"#,
        );
        assert_eq!(
            TournamentRecord::from_resource(resource)
                .unwrap()
                .participants_count,
            7
        );
    }

    #[test]
    fn test_from_resource_missing_created_at_is_skipped() {
        let resource = resource_from_json(
            r#"{ "id": "tour-6", "attributes": { "name": "Undated" } }"#,
        );
        assert!(TournamentRecord::from_resource(resource).is_none());
    }

    #[test]
    fn test_from_resource_unparseable_created_at_is_skipped() {
        let resource = resource_from_json(
            r#"{ "id": "tour-7", "attributes": { "created_at": "not-a-date" } }"#,
        );
        assert!(TournamentRecord::from_resource(resource).is_none());
    }

    #[test]
    fn test_from_resource_url_falls_back_to_slug() {
        let resource = resource_from_json(
            r#"{
                "id": "tour-8",
                "attributes": {
                    "url": "slug-only",
                    "created_at": "2024-02-01T00:00:00Z"
                }
            }"#,
        );
        assert_eq!(
            TournamentRecord::from_resource(resource).unwrap().url,
            "slug-only"
        );
    }

    #[test]
    fn test_effective_date_falls_back_to_created_at() {
        let created = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
        let record = TournamentRecord {
            id: "t".to_string(),
            name: String::new(),
            url: String::new(),
            state: String::new(),
            participants_count: 0,
            started_at: None,
            created_at: created,
        };
        assert_eq!(record.effective_date(), created);
        assert!(record.is_in_year(2023));
        assert!(!record.is_in_year(2024));

        let started = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        let record = TournamentRecord {
            started_at: Some(started),
            ..record
        };
        assert_eq!(record.effective_date(), started);
        assert!(record.is_in_year(2024));
        assert!(!record.is_in_year(2023));
    }

    #[test]
    fn test_parse_datetime_with_offset() {
        let parsed = parse_datetime("2024-03-09T18:30:00.000-06:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 10, 0, 30, 0).unwrap());
    }

    #[test]
    fn test_index_response_tolerates_missing_sections() {
        let response: TournamentIndexResponse = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        assert!(response.data.is_empty());
        assert!(response.meta.is_none());
        assert!(response.links.is_none());
    }
}
