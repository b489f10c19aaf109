//! Error types for tripflow

use thiserror::Error;

/// The submission step a network failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStep {
    /// The multipart create-schedule call
    CreateSchedule,
    /// A per-day attach-description call
    AttachDay,
    /// The place-name search call
    PlaceSearch,
}

impl std::fmt::Display for SubmitStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::CreateSchedule => "create schedule",
            Self::AttachDay => "attach day",
            Self::PlaceSearch => "place search",
        };
        f.write_str(s)
    }
}

/// tripflow error type
#[derive(Debug, Error)]
pub enum Error {
    /// A draft field failed pre-network validation
    #[error("invalid {field}: {message}")]
    Validation {
        /// The draft field that failed the check
        field: &'static str,
        /// Field-specific description of the violation
        message: String,
    },

    /// The banner image could not be resolved to a local file
    #[error("banner image could not be resolved: {0}")]
    ImageResolution(String),

    /// A remote call failed, tagged with the step it belonged to
    #[error("{step} failed: {message}")]
    Network {
        /// The pipeline step that issued the call
        step: SubmitStep,
        /// Transport or response-level failure description
        message: String,
    },

    /// The create call was rejected with a structured validation list
    #[error("server rejected the schedule: {}", .0.join("; "))]
    ServerValidation(Vec<String>),

    /// The schedule was created but a later attach call failed.
    ///
    /// There is no compensation: the schedule and any days attached
    /// before the failure remain persisted server-side.
    #[error(
        "schedule {schedule_id} was created but attaching day {day} failed: {message} \
         (previously attached days remain on the server)"
    )]
    PartialSubmission {
        /// The id the create call returned
        schedule_id: String,
        /// 1-based id of the day whose attach call failed
        day: u32,
        /// Underlying failure description
        message: String,
    },

    /// A submission was started while another one is in flight
    #[error("a submission is already in progress for this draft")]
    SubmissionInProgress,

    /// HTTP transport error
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Input could not be parsed
    #[error("parse error: {0}")]
    Parse(String),
}

/// Convenience result type
pub type Result<T> = std::result::Result<T, Error>;
