//! Two-phase submission engine.
//!
//! A submission runs through a fixed sequence of states:
//! validate the draft snapshot, resolve the banner image, issue one
//! create call, then attach each day strictly in ascending order.
//! There is no rollback: a failure after the create call leaves the
//! schedule and any already-attached days persisted server-side.

mod execute;
mod progress;
mod validate;

pub use execute::{day_attachments, execute_submission, submit, SubmissionReceipt};
pub use progress::{DayStatus, NoopProgress, Phase, ProgressCallback};
pub use validate::{validate_draft, ValidatedDay, ValidatedDraft};
