//! tripflow - multi-day trip-schedule composition and submission
//!
//! The library is organized around the submission pipeline:
//! a [`draft::DraftSession`] holds the in-progress itinerary, the
//! [`locate`] and [`image`] resolvers fill in coordinates and the banner
//! file, and [`submit`] validates a snapshot and drives the two-phase
//! remote protocol (one create call, then one attach call per day, in
//! strict day order) against a [`remote::ScheduleService`].

pub mod dates;
pub mod draft;
pub mod error;
pub mod image;
pub mod locate;
pub mod remote;
pub mod submit;
pub mod types;
