//! The validated search request submitted by the search form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::search_const::{DATE_FORMAT, PARAM_DRIVE_HOURS, PARAM_END_DATE, PARAM_FROM_PLACE, PARAM_START_DATE};


/// A place picked through the place autocomplete.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeocodedPlace {
    pub formatted_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

impl GeocodedPlace {
    pub fn new(formatted_address: impl Into<String>) -> Self {
        Self { formatted_address: formatted_address.into(), place_id: None }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidSearchRequest {
    #[error("end_date ({end}) must be a date after start_date ({start})")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("drive_hours must be a non-negative number, got {0}")]
    InvalidDriveHours(f64),
}

/// Travel window and origin of one search.
///
/// Fields are private so that every value in circulation satisfies
/// `start_date <= end_date` and `drive_hours >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSearchRequest")]
pub struct SearchRequest {
    start_date: NaiveDate,
    end_date: NaiveDate,
    drive_hours: f64,
    origin_place: Option<GeocodedPlace>,
}

#[derive(Deserialize)]
struct RawSearchRequest {
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    drive_hours: f64,
    #[serde(default)]
    origin_place: Option<GeocodedPlace>,
}

impl TryFrom<RawSearchRequest> for SearchRequest {
    type Error = InvalidSearchRequest;

    fn try_from(raw: RawSearchRequest) -> Result<Self, Self::Error> {
        SearchRequest::new(raw.start_date, raw.end_date, raw.drive_hours, raw.origin_place)
    }
}

impl SearchRequest {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        drive_hours: f64,
        origin_place: Option<GeocodedPlace>,
    ) -> Result<Self, InvalidSearchRequest> {
        if end_date < start_date {
            return Err(InvalidSearchRequest::EndBeforeStart { start: start_date, end: end_date });
        }
        if !drive_hours.is_finite() || drive_hours < 0.0 {
            return Err(InvalidSearchRequest::InvalidDriveHours(drive_hours));
        }
        Ok(Self { start_date, end_date, drive_hours, origin_place })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Maximum drive time; `0` means the service should not limit by drive time.
    pub fn drive_hours(&self) -> f64 {
        self.drive_hours
    }

    pub fn origin_place(&self) -> Option<&GeocodedPlace> {
        self.origin_place.as_ref()
    }

    /// Query string parameters understood by the search service.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            (PARAM_START_DATE, self.start_date.format(DATE_FORMAT).to_string()),
            (PARAM_END_DATE, self.end_date.format(DATE_FORMAT).to_string()),
            (PARAM_DRIVE_HOURS, self.drive_hours.to_string()),
            (
                PARAM_FROM_PLACE,
                self.origin_place.as_ref().map(|p| p.formatted_address.clone()).unwrap_or_default(),
            ),
        ]
    }
}
