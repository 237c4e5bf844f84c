//! Display-ready fields derived from a launch.
//!
//! Every function here is total: a missing or malformed field degrades to a
//! sentinel value instead of failing. Nested fields of a [`LaunchRecord`]
//! should only be read for display through these accessors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;

use crate::launch::{FlightNumber, LaunchRecord};

/// Shown in place of any field the API did not provide.
pub const UNKNOWN: &str = "unknown";

/// Shown when a launch has no description.
pub const NO_DETAILS: &str = "No details available.";

/// Calendar date of a launch for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchDate {
    /// The launch happened (or is dated) on this day.
    Date(NaiveDate),
    /// The launch is upcoming; its timestamp carries no meaning.
    Pending,
    /// The timestamp could not be parsed.
    Unknown,
}

impl std::fmt::Display for LaunchDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Pending => write!(f, "Upcoming.."),
            Self::Unknown => write!(f, "Unknown date"),
        }
    }
}

impl Serialize for LaunchDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Mass of the primary payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadMass {
    /// Published mass in kilograms.
    Kg(f64),
    /// No payload, or the mass was not published.
    Unknown,
}

impl std::fmt::Display for PayloadMass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kg(kg) => write!(f, "{kg}"),
            Self::Unknown => f.write_str(UNKNOWN),
        }
    }
}

impl Serialize for PayloadMass {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Kg(kg) => serializer.serialize_f64(*kg),
            Self::Unknown => serializer.serialize_none(),
        }
    }
}

/// External links, absent when the API has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Links<'a> {
    /// Webcast or recording.
    pub video: Option<&'a str>,
    /// Wikipedia article.
    pub wikipedia: Option<&'a str>,
}

/// Everything the detail panel shows for one launch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewFields<'a> {
    /// Identifier.
    pub flight_number: FlightNumber,
    /// Mission name.
    pub mission_name: &'a str,
    /// Date, pending marker, or unknown marker.
    pub date: LaunchDate,
    /// Launch site, or [`UNKNOWN`].
    pub site_name: &'a str,
    /// Rocket, or [`UNKNOWN`].
    pub rocket_name: &'a str,
    /// Mass of the first payload.
    pub payload_mass_kg: PayloadMass,
    /// "Yes" or "No".
    pub success: &'static str,
    /// External links.
    pub links: Links<'a>,
    /// Description, or [`NO_DETAILS`].
    pub details: &'a str,
}

/// Everything one row of the launch list shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow<'a> {
    /// Identifier, used to select the launch.
    pub flight_number: FlightNumber,
    /// Mission name.
    pub mission_name: &'a str,
    /// Date, pending marker, or unknown marker.
    pub date: LaunchDate,
    /// Launch site, or [`UNKNOWN`].
    pub site_name: &'a str,
}

/// Calendar date of a launch.
///
/// Upcoming launches are always [`LaunchDate::Pending`]. Otherwise the date
/// component of `launch_date_local` after conversion to UTC. Timestamps
/// without an offset are read as UTC.
#[must_use]
pub fn date_only(launch: &LaunchRecord) -> LaunchDate {
    if launch.upcoming {
        return LaunchDate::Pending;
    }
    parse_date(&launch.launch_date_local).map_or(LaunchDate::Unknown, LaunchDate::Date)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|timestamp| timestamp.date())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// "Yes" for a successful launch, "No" otherwise.
///
/// An unknown outcome is reported as "No"; there is no third label.
#[must_use]
pub fn success_label(launch: &LaunchRecord) -> &'static str {
    if launch.launch_success == Some(true) {
        "Yes"
    } else {
        "No"
    }
}

/// Mass of the first payload of the second stage.
#[must_use]
pub fn payload_mass_kg(launch: &LaunchRecord) -> PayloadMass {
    launch
        .payloads()
        .first()
        .and_then(|payload| payload.payload_mass_kg)
        .map_or(PayloadMass::Unknown, PayloadMass::Kg)
}

/// External links; empty strings count as absent.
#[must_use]
pub fn links(launch: &LaunchRecord) -> Links<'_> {
    Links {
        video: non_blank(launch.links.video_link.as_deref()),
        wikipedia: non_blank(launch.links.wikipedia.as_deref()),
    }
}

/// All detail panel fields of a launch.
#[must_use]
pub fn format_for_display(launch: &LaunchRecord) -> ViewFields<'_> {
    ViewFields {
        flight_number: launch.flight_number,
        mission_name: &launch.mission_name,
        date: date_only(launch),
        site_name: launch.site_name().unwrap_or(UNKNOWN),
        rocket_name: non_empty_or_unknown(launch.rocket_name()),
        payload_mass_kg: payload_mass_kg(launch),
        success: success_label(launch),
        links: links(launch),
        details: non_blank(launch.details.as_deref()).unwrap_or(NO_DETAILS),
    }
}

/// List row fields of a launch.
#[must_use]
pub fn list_row(launch: &LaunchRecord) -> ListRow<'_> {
    ListRow {
        flight_number: launch.flight_number,
        mission_name: &launch.mission_name,
        date: date_only(launch),
        site_name: launch.site_name().unwrap_or(UNKNOWN),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn non_empty_or_unknown(value: &str) -> &str {
    if value.is_empty() {
        UNKNOWN
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::fixtures::{launch, upcoming, FALCONSAT_JSON};
    use crate::launch::{LaunchLinks, Payload, SecondStage};

    fn falconsat() -> LaunchRecord {
        let mut records: Vec<LaunchRecord> = serde_json::from_str(FALCONSAT_JSON).unwrap();
        records.remove(0)
    }

    #[test]
    fn test_date_only_past() {
        assert_eq!(date_only(&falconsat()).to_string(), "2006-03-24");
    }

    #[test]
    fn test_date_only_is_utc_date() {
        let mut record = launch(1, "FalconSat", "Falcon 1");
        record.launch_date_local = "2006-03-25T10:30:00+12:00".to_string();
        assert_eq!(
            date_only(&record),
            LaunchDate::Date(NaiveDate::from_ymd_opt(2006, 3, 24).unwrap())
        );

        record.launch_date_local = "2008-09-28T23:15:00-12:00".to_string();
        assert_eq!(date_only(&record).to_string(), "2008-09-29");
    }

    #[test]
    fn test_date_only_naive_timestamp() {
        let mut record = launch(1, "A", "Falcon 1");
        record.launch_date_local = "2010-06-04T14:45:00".to_string();
        assert_eq!(date_only(&record).to_string(), "2010-06-04");
    }

    #[test]
    fn test_date_only_upcoming_is_pending() {
        let mut record = upcoming(90, "TBD");
        record.launch_date_local = "garbage".to_string();
        assert_eq!(date_only(&record), LaunchDate::Pending);
        assert_eq!(date_only(&record).to_string(), "Upcoming..");
    }

    #[test]
    fn test_date_only_unparsable_is_unknown() {
        let mut record = launch(1, "A", "Falcon 1");
        record.launch_date_local = "next tuesday".to_string();
        assert_eq!(date_only(&record), LaunchDate::Unknown);

        record.launch_date_local = String::new();
        assert_eq!(date_only(&record).to_string(), "Unknown date");
    }

    #[test]
    fn test_success_label() {
        let mut record = launch(1, "A", "Falcon 1");
        record.launch_success = Some(true);
        assert_eq!(success_label(&record), "Yes");

        record.launch_success = Some(false);
        assert_eq!(success_label(&record), "No");

        record.launch_success = None;
        assert_eq!(success_label(&record), "No");
    }

    #[test]
    fn test_payload_mass_first_payload() {
        let mut record = launch(1, "A", "Falcon 9");
        record.rocket.second_stage = Some(SecondStage {
            payloads: vec![
                Payload {
                    payload_mass_kg: Some(2500.5),
                },
                Payload {
                    payload_mass_kg: Some(9000.0),
                },
            ],
        });
        assert_eq!(payload_mass_kg(&record), PayloadMass::Kg(2500.5));
        assert_eq!(payload_mass_kg(&falconsat()).to_string(), "20");
    }

    #[test]
    fn test_payload_mass_empty_payloads_is_unknown() {
        let mut record = launch(1, "A", "Falcon 9");
        record.rocket.second_stage = Some(SecondStage { payloads: vec![] });
        assert_eq!(payload_mass_kg(&record), PayloadMass::Unknown);
        assert_eq!(payload_mass_kg(&record).to_string(), "unknown");
    }

    #[test]
    fn test_payload_mass_missing_stage_or_mass_is_unknown() {
        let record = LaunchRecord::new(1, "Bare");
        assert_eq!(payload_mass_kg(&record), PayloadMass::Unknown);

        let mut record = launch(2, "B", "Falcon 9");
        record.rocket.second_stage = Some(SecondStage {
            payloads: vec![Payload::default()],
        });
        assert_eq!(payload_mass_kg(&record), PayloadMass::Unknown);
    }

    #[test]
    fn test_links_pass_through_and_blank_is_absent() {
        let mut record = launch(1, "A", "Falcon 1");
        record.links = LaunchLinks {
            video_link: Some("https://www.youtube.com/watch?v=0a_00nJ_Y88".to_string()),
            wikipedia: Some("  ".to_string()),
        };
        let links = links(&record);
        assert_eq!(
            links.video,
            Some("https://www.youtube.com/watch?v=0a_00nJ_Y88")
        );
        assert!(links.wikipedia.is_none());
    }

    #[test]
    fn test_format_for_display_sparse_record() {
        let record = LaunchRecord::new(42, "Mystery");
        let fields = format_for_display(&record);

        assert_eq!(fields.mission_name, "Mystery");
        assert_eq!(fields.date, LaunchDate::Unknown);
        assert_eq!(fields.site_name, UNKNOWN);
        assert_eq!(fields.rocket_name, UNKNOWN);
        assert_eq!(fields.payload_mass_kg, PayloadMass::Unknown);
        assert_eq!(fields.success, "No");
        assert_eq!(fields.links, Links::default());
        assert_eq!(fields.details, NO_DETAILS);
    }

    #[test]
    fn test_format_for_display_full_record() {
        let mut record = falconsat();
        record.details = Some("Engine failure at 33 seconds".to_string());
        let fields = format_for_display(&record);

        assert_eq!(fields.flight_number, 1);
        assert_eq!(fields.site_name, "Kwajalein Atoll");
        assert_eq!(fields.rocket_name, "Falcon 1");
        assert_eq!(fields.details, "Engine failure at 33 seconds");
    }

    #[test]
    fn test_list_row() {
        let record = upcoming(80, "Starlink-12");
        let row = list_row(&record);
        assert_eq!(row.flight_number, 80);
        assert_eq!(row.mission_name, "Starlink-12");
        assert_eq!(row.date, LaunchDate::Pending);
        assert!(row.site_name.contains("Cape Canaveral"));
    }

    #[test]
    fn test_view_fields_serialize() {
        let record = falconsat();
        let fields = format_for_display(&record);
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json["date"], "2006-03-24");
        assert_eq!(json["payload_mass_kg"], 20.0);
        assert_eq!(json["success"], "No");
        assert!(json["links"]["video"].is_null());

        let bare = LaunchRecord::new(2, "X");
        let sparse = format_for_display(&bare);
        let json = serde_json::to_value(&sparse).unwrap();
        assert!(json["payload_mass_kg"].is_null());
        assert_eq!(json["date"], "Unknown date");
    }
}
