//! Progress callback trait for interface-agnostic updates
//!
//! Lets different front ends (CLI, app shell) observe a submission
//! without the engine knowing how updates are rendered.

use crate::error::Error;
use async_trait::async_trait;

/// Submission state the pipeline is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking the draft snapshot, no network yet
    Validating,
    /// Resolving the banner into a local file
    ResolvingImage,
    /// Issuing the multipart create call
    CreatingSchedule,
    /// Attaching day descriptions one at a time
    AttachingDays,
    /// Submission finished successfully
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Validating => "Validating draft",
            Self::ResolvingImage => "Resolving banner image",
            Self::CreatingSchedule => "Creating schedule",
            Self::AttachingDays => "Attaching days",
            Self::Complete => "Complete",
        };
        f.write_str(s)
    }
}

/// Status of one day's attach call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    /// Attach call issued
    Started,
    /// Attach call succeeded
    Success,
    /// Attach call failed with error message
    Failed(String),
}

/// Progress callback trait
///
/// Implement this to receive updates during submission; the CLI prints
/// to the terminal, tests usually pass [`NoopProgress`].
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the create call returned a schedule id
    async fn on_schedule_created(&self, schedule_id: &str);

    /// Called per day as its attach call starts and finishes
    async fn on_day(&self, day_id: u32, status: DayStatus);

    /// Called when the submission fails
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for tests or headless use
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_schedule_created(&self, _schedule_id: &str) {}
    async fn on_day(&self, _day_id: u32, _status: DayStatus) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
