//! Core types for tripflow

use serde::{Deserialize, Serialize};

/// A resolved coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from raw degrees
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// How the trip is traveled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// Bicycle
    Bike,
    /// Personal car
    #[default]
    Car,
    /// Bus
    Bus,
    /// Train
    Train,
    /// Flight
    Flight,
    /// On foot
    Walk,
}

impl TravelMode {
    /// Wire value used by the create call
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bike => "bike",
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Train => "train",
            Self::Flight => "flight",
            Self::Walk => "walk",
        }
    }
}

/// Who can see a published schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Anyone can view
    #[default]
    Public,
    /// Only the owner can view
    Private,
}

impl Visibility {
    /// Wire value for the `visible` multipart field
    #[must_use]
    pub const fn as_wire_bool(self) -> &'static str {
        match self {
            Self::Public => "true",
            Self::Private => "false",
        }
    }
}

/// One day of an itinerary draft.
///
/// Latitude and longitude stay free text until validation: they come
/// from UI text fields or are written back by the day locator, and a
/// day is only "complete" once both parse as numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based id, contiguous and matching position in the day list
    pub id: u32,
    /// What happens on this day
    pub description: String,
    /// Latitude as entered or resolved (must parse as f64 to submit)
    pub latitude: String,
    /// Longitude as entered or resolved (must parse as f64 to submit)
    pub longitude: String,
    /// Free-form start time, e.g. "09:00"
    pub start_time: String,
    /// Free-form end time, e.g. "18:00"
    pub end_time: String,
}

impl DayPlan {
    /// Parse this day's coordinates, if both fields are numeric
    #[must_use]
    pub fn coordinates(&self) -> Option<GeoPoint> {
        let latitude = self.latitude.trim().parse().ok()?;
        let longitude = self.longitude.trim().parse().ok()?;
        Some(GeoPoint {
            latitude,
            longitude,
        })
    }

    /// A day is complete iff it has a description and numeric coordinates
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.description.trim().is_empty() && self.coordinates().is_some()
    }
}

/// The client-held, not-yet-persisted itinerary being composed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDraft {
    /// Banner image reference: local path, `file://` URI, or remote URL
    pub banner_image: Option<String>,
    /// Trip name shown on the schedule listing
    pub trip_name: String,
    /// Travel mode for the whole trip
    pub travel_mode: TravelMode,
    /// Schedule visibility
    pub visibility: Visibility,
    /// Trip-level origin
    pub location_from: Option<GeoPoint>,
    /// Trip-level destination
    pub location_to: Option<GeoPoint>,
    /// Start date as an ISO `yyyy-mm-dd` string
    pub from_date: Option<String>,
    /// End date as an ISO `yyyy-mm-dd` string
    pub to_date: Option<String>,
    /// Ordered day plans, ids contiguous from 1
    pub days: Vec<DayPlan>,
    /// Set only after a fully successful submission
    pub submitted: bool,
}

/// Partial update for [`ScheduleDraft`] top-level fields.
///
/// `None` fields are left untouched; `Some` fields overwrite
/// (last-write-wins shallow merge).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftPatch {
    /// New banner image reference
    pub banner_image: Option<String>,
    /// New trip name
    pub trip_name: Option<String>,
    /// New travel mode
    pub travel_mode: Option<TravelMode>,
    /// New visibility
    pub visibility: Option<Visibility>,
    /// New trip origin
    pub location_from: Option<GeoPoint>,
    /// New trip destination
    pub location_to: Option<GeoPoint>,
    /// New start date (ISO string)
    pub from_date: Option<String>,
    /// New end date (ISO string)
    pub to_date: Option<String>,
}

/// Partial update for a single [`DayPlan`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayPatch {
    /// New description
    pub description: Option<String>,
    /// New latitude text
    pub latitude: Option<String>,
    /// New longitude text
    pub longitude: Option<String>,
    /// New start time
    pub start_time: Option<String>,
    /// New end time
    pub end_time: Option<String>,
}
