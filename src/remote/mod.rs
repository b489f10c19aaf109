//! Remote schedule service.
//!
//! Abstracts the two calls the submission pipeline makes: the multipart
//! create call and the per-day attach call. The trait seam lets tests
//! drive the orchestrator against a call-tracking mock.

mod http;

pub use http::HttpScheduleService;

use crate::error::Result;
use crate::types::{GeoPoint, TravelMode, Visibility};
use async_trait::async_trait;
use std::path::PathBuf;

/// Trip-level fields for the create call
#[derive(Debug, Clone, PartialEq)]
pub struct CreateScheduleRequest {
    /// Trip name
    pub trip_name: String,
    /// Travel mode
    pub travel_mode: TravelMode,
    /// Visibility, sent as the `visible` field
    pub visibility: Visibility,
    /// Trip-level origin
    pub location_from: GeoPoint,
    /// Trip-level destination
    pub location_to: GeoPoint,
    /// Start date, ISO `yyyy-mm-dd`
    pub dates_from: String,
    /// End date, ISO `yyyy-mm-dd`
    pub dates_end: String,
    /// Inclusive day count, sent as a stringified integer
    pub number_of_days: i64,
    /// Resolved local banner file to upload
    pub banner: PathBuf,
}

/// One day's payload for the attach call
#[derive(Debug, Clone, PartialEq)]
pub struct DayAttachment {
    /// 1-based day id (path context only, not part of the wire body)
    pub day_id: u32,
    /// Day description
    pub description: String,
    /// Calendar date in unpadded `d-m-yyyy`
    pub date: String,
    /// This day's own coordinates
    pub from: GeoPoint,
    /// The next day's coordinates, or `from` again on the last day
    pub to: GeoPoint,
}

/// Remote service the submission pipeline persists schedules through
#[async_trait]
pub trait ScheduleService: Send + Sync {
    /// Issue the multipart create call, returning the new schedule id
    async fn create_schedule(&self, request: &CreateScheduleRequest) -> Result<String>;

    /// Attach one day's description to an existing schedule
    async fn attach_day(&self, schedule_id: &str, day: &DayAttachment) -> Result<()>;
}
