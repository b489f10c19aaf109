//! Test data factories for tripflow types
//!
//! These are test utilities - not all may be used in current tests but
//! are available for future test development.

#![allow(dead_code)]

use std::path::Path;
use tripflow::types::{DayPlan, GeoPoint, ScheduleDraft};

/// A complete day at a distinct coordinate derived from its id
pub fn make_day(id: u32) -> DayPlan {
    DayPlan {
        id,
        description: format!("day {id} plan"),
        latitude: f64::from(id).to_string(),
        longitude: (f64::from(id) * 10.0).to_string(),
        start_time: "09:00".to_string(),
        end_time: "18:00".to_string(),
    }
}

/// A day missing its coordinates
pub fn make_unlocated_day(id: u32) -> DayPlan {
    DayPlan {
        id,
        description: format!("day {id} plan"),
        ..DayPlan::default()
    }
}

/// A draft that passes every validation check.
///
/// `banner` should point at an existing local file so the image
/// resolver passes it through without touching the network.
pub fn make_draft(banner: &Path, day_count: u32) -> ScheduleDraft {
    ScheduleDraft {
        banner_image: Some(banner.display().to_string()),
        trip_name: "Goa Trip".to_string(),
        location_from: Some(GeoPoint::new(12.9716, 77.5946)),
        location_to: Some(GeoPoint::new(15.4909, 73.8278)),
        from_date: Some("2025-02-10".to_string()),
        to_date: Some("2025-02-12".to_string()),
        days: (1..=day_count).map(make_day).collect(),
        ..ScheduleDraft::default()
    }
}

/// Write a small banner file into `dir` and return the full path
pub fn write_banner(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("banner.jpg");
    std::fs::write(&path, b"jpeg bytes").expect("write banner fixture");
    path
}
