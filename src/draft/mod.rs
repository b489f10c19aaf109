//! In-progress schedule draft store.
//!
//! A [`DraftSession`] owns exactly one [`ScheduleDraft`] for the
//! lifetime of the composition flow: created on screen entry (optionally
//! pre-seeded with a destination), mutated by UI-driven updates, and
//! reset only after a fully successful submission or an explicit
//! discard. The store performs no validation; that is the submission
//! pipeline's job.

use crate::error::{Error, Result};
use crate::types::{DayPatch, DayPlan, DraftPatch, GeoPoint, ScheduleDraft};

/// Owning handle for one in-progress schedule draft.
///
/// Single-writer, last-write-wins. While a submission is in flight the
/// session is marked busy and refuses to hand out another snapshot;
/// this mirrors the UI being disabled for the duration rather than any
/// data-level lock.
#[derive(Debug, Default)]
pub struct DraftSession {
    draft: ScheduleDraft,
    busy: bool,
}

impl DraftSession {
    /// Start a fresh, empty draft
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft pre-seeded with a previously selected destination
    #[must_use]
    pub fn seeded(destination: GeoPoint) -> Self {
        Self {
            draft: ScheduleDraft {
                location_to: Some(destination),
                ..ScheduleDraft::default()
            },
            busy: false,
        }
    }

    /// Resume composing an existing draft, e.g. one loaded from disk
    #[must_use]
    pub fn open(draft: ScheduleDraft) -> Self {
        Self {
            draft,
            busy: false,
        }
    }

    /// Read access to the current draft
    #[must_use]
    pub const fn draft(&self) -> &ScheduleDraft {
        &self.draft
    }

    /// Whether a submission is currently in flight
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Shallow-merge top-level fields, last write wins
    pub fn update(&mut self, patch: DraftPatch) {
        let d = &mut self.draft;
        if let Some(v) = patch.banner_image {
            d.banner_image = Some(v);
        }
        if let Some(v) = patch.trip_name {
            d.trip_name = v;
        }
        if let Some(v) = patch.travel_mode {
            d.travel_mode = v;
        }
        if let Some(v) = patch.visibility {
            d.visibility = v;
        }
        if let Some(v) = patch.location_from {
            d.location_from = Some(v);
        }
        if let Some(v) = patch.location_to {
            d.location_to = Some(v);
        }
        if let Some(v) = patch.from_date {
            d.from_date = Some(v);
        }
        if let Some(v) = patch.to_date {
            d.to_date = Some(v);
        }
    }

    /// Append a new empty day and return its id
    pub fn add_day(&mut self) -> u32 {
        let id = u32::try_from(self.draft.days.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        self.draft.days.push(DayPlan {
            id,
            ..DayPlan::default()
        });
        id
    }

    /// Remove a day and renumber the rest so ids stay contiguous from 1
    pub fn remove_day(&mut self, day_id: u32) {
        self.draft.days.retain(|d| d.id != day_id);
        for (idx, day) in self.draft.days.iter_mut().enumerate() {
            day.id = u32::try_from(idx).unwrap_or(u32::MAX).saturating_add(1);
        }
    }

    /// Shallow-merge fields of one day
    pub fn update_day(&mut self, day_id: u32, patch: DayPatch) {
        if let Some(day) = self.draft.days.iter_mut().find(|d| d.id == day_id) {
            if let Some(v) = patch.description {
                day.description = v;
            }
            if let Some(v) = patch.latitude {
                day.latitude = v;
            }
            if let Some(v) = patch.longitude {
                day.longitude = v;
            }
            if let Some(v) = patch.start_time {
                day.start_time = v;
            }
            if let Some(v) = patch.end_time {
                day.end_time = v;
            }
        }
    }

    /// Write resolved coordinates into one day
    pub fn update_day_location(&mut self, day_id: u32, point: GeoPoint) {
        if let Some(day) = self.draft.days.iter_mut().find(|d| d.id == day_id) {
            day.latitude = point.latitude.to_string();
            day.longitude = point.longitude.to_string();
        }
    }

    /// Discard the draft and start over
    pub fn reset(&mut self) {
        self.draft = ScheduleDraft::default();
        self.busy = false;
    }

    /// Clone the current draft state
    #[must_use]
    pub fn snapshot(&self) -> ScheduleDraft {
        self.draft.clone()
    }

    /// Take the read-only snapshot a submission runs against and mark
    /// the session busy until [`Self::finish_submission`] is called.
    pub fn begin_submission(&mut self) -> Result<ScheduleDraft> {
        if self.busy {
            return Err(Error::SubmissionInProgress);
        }
        self.busy = true;
        Ok(self.draft.clone())
    }

    /// End the in-flight submission.
    ///
    /// On success the draft is marked submitted and the session resets;
    /// on failure the draft is kept intact for correction and retry.
    pub fn finish_submission(&mut self, success: bool) {
        if success {
            self.draft.submitted = true;
            self.reset();
        } else {
            self.busy = false;
        }
    }
}
