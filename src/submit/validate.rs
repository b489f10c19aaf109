//! Pre-network draft validation.
//!
//! Checks run in a fixed order and fail closed on the first violation,
//! each with a field-specific message. Nothing here touches the
//! network; a draft that fails validation produces zero remote calls.

use crate::dates;
use crate::error::{Error, Result};
use crate::types::{GeoPoint, ScheduleDraft, TravelMode, Visibility};
use chrono::NaiveDate;

/// Minimum trip name length
const MIN_TRIP_NAME_LEN: usize = 3;

/// One day with its coordinates already parsed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDay {
    /// 1-based day id
    pub id: u32,
    /// Day description
    pub description: String,
    /// Parsed coordinates
    pub coordinates: GeoPoint,
}

/// A draft snapshot that passed every pre-network check.
///
/// Dates and coordinates are parsed exactly once here; the execute
/// phase consumes these values without re-validating.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    /// Banner reference, still unresolved
    pub banner_reference: String,
    /// Trip name
    pub trip_name: String,
    /// Travel mode
    pub travel_mode: TravelMode,
    /// Visibility
    pub visibility: Visibility,
    /// Trip-level origin
    pub location_from: GeoPoint,
    /// Trip-level destination
    pub location_to: GeoPoint,
    /// Parsed start date
    pub from_date: NaiveDate,
    /// Parsed end date
    pub to_date: NaiveDate,
    /// Inclusive day count derived from the date range
    pub number_of_days: i64,
    /// Days in ascending id order with parsed coordinates
    pub days: Vec<ValidatedDay>,
}

fn invalid(field: &'static str, message: impl Into<String>) -> Error {
    Error::Validation {
        field,
        message: message.into(),
    }
}

/// Validate a draft snapshot, failing closed on the first violation.
///
/// Check order: banner present; trip name present and long enough; at
/// least one day; every day complete (in id order, naming the lowest
/// offending day); day ids contiguous from 1; date range present and
/// parseable; trip-level coordinates present.
pub fn validate_draft(draft: &ScheduleDraft) -> Result<ValidatedDraft> {
    let banner_reference = draft
        .banner_image
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .ok_or_else(|| invalid("banner image", "a banner image is required"))?
        .to_string();

    let trip_name = draft.trip_name.trim();
    if trip_name.is_empty() {
        return Err(invalid("trip name", "a trip name is required"));
    }
    if trip_name.chars().count() < MIN_TRIP_NAME_LEN {
        return Err(invalid(
            "trip name",
            format!("must be at least {MIN_TRIP_NAME_LEN} characters"),
        ));
    }

    if draft.days.is_empty() {
        return Err(invalid("days", "add at least one day to the itinerary"));
    }

    let mut ordered: Vec<_> = draft.days.iter().collect();
    ordered.sort_by_key(|d| d.id);

    let mut days = Vec::with_capacity(ordered.len());
    for day in &ordered {
        if day.description.trim().is_empty() {
            return Err(invalid(
                "days",
                format!("day {} is missing a description", day.id),
            ));
        }
        let coordinates = day.coordinates().ok_or_else(|| {
            invalid("days", format!("day {} has no usable location", day.id))
        })?;
        days.push(ValidatedDay {
            id: day.id,
            description: day.description.trim().to_string(),
            coordinates,
        });
    }

    // Day ids must be contiguous from 1: each day's attach date is
    // derived from its id, so a gap would date days past the trip's end.
    for (idx, day) in days.iter().enumerate() {
        let expected = u32::try_from(idx).unwrap_or(u32::MAX).saturating_add(1);
        if day.id != expected {
            return Err(invalid(
                "days",
                format!("day ids must be contiguous from 1 (found day {} at position {expected})", day.id),
            ));
        }
    }

    let from_raw = draft
        .from_date
        .as_deref()
        .ok_or_else(|| invalid("dates", "a start date is required"))?;
    let to_raw = draft
        .to_date
        .as_deref()
        .ok_or_else(|| invalid("dates", "an end date is required"))?;
    let from_date =
        dates::parse_iso(from_raw).map_err(|e| invalid("dates", e.to_string()))?;
    let to_date = dates::parse_iso(to_raw).map_err(|e| invalid("dates", e.to_string()))?;
    if to_date < from_date {
        return Err(invalid("dates", "end date is before start date"));
    }

    let location_from = draft
        .location_from
        .ok_or_else(|| invalid("locations", "a starting location is required"))?;
    let location_to = draft
        .location_to
        .ok_or_else(|| invalid("locations", "a destination is required"))?;

    Ok(ValidatedDraft {
        banner_reference,
        trip_name: trip_name.to_string(),
        travel_mode: draft.travel_mode,
        visibility: draft.visibility,
        location_from,
        location_to,
        from_date,
        to_date,
        number_of_days: dates::trip_length_days(from_date, to_date),
        days,
    })
}
