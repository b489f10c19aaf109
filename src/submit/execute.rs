//! Submission execution.
//!
//! Drives a validated snapshot through the remote protocol: one
//! multipart create call, then one attach call per day in strict
//! ascending order. Each day's destination is taken from the following
//! day's coordinates, so the calls can never run concurrently or out of
//! order. A failure after the create call is surfaced as a partial
//! submission; no compensating calls are made.

use crate::dates;
use crate::draft::DraftSession;
use crate::error::{Error, Result};
use crate::image::ImageResolver;
use crate::remote::{CreateScheduleRequest, DayAttachment, ScheduleService};
use crate::submit::progress::{DayStatus, Phase, ProgressCallback};
use crate::submit::validate::{validate_draft, ValidatedDraft};
use crate::types::ScheduleDraft;

/// Outcome of a fully successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Id the create call returned
    pub schedule_id: String,
    /// Number of days attached (always the full day count on success)
    pub days_attached: usize,
}

/// Build the day-chain attachments for a validated draft.
///
/// For day `i < N` the destination is day `i+1`'s coordinates; the last
/// day closes on itself (its destination equals its own origin).
#[must_use]
pub fn day_attachments(validated: &ValidatedDraft) -> Vec<DayAttachment> {
    let days = &validated.days;
    days.iter()
        .enumerate()
        .map(|(idx, day)| {
            let to = days.get(idx + 1).map_or(day.coordinates, |next| next.coordinates);
            DayAttachment {
                day_id: day.id,
                description: day.description.clone(),
                date: dates::attach_string(dates::day_date(validated.from_date, day.id)),
                from: day.coordinates,
                to,
            }
        })
        .collect()
}

/// Execute a submission against a draft snapshot.
///
/// The snapshot is taken by the caller and never re-read during the
/// run. On success the caller is responsible for resetting the draft;
/// on failure the draft is untouched and can be corrected and
/// resubmitted (which creates a brand-new schedule; there is no
/// idempotency key).
pub async fn execute_submission(
    snapshot: &ScheduleDraft,
    service: &dyn ScheduleService,
    images: &ImageResolver,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionReceipt> {
    // Phase: validating; zero network calls on any violation
    progress.on_phase(Phase::Validating).await;
    let validated = match validate_draft(snapshot) {
        Ok(v) => v,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };

    // Phase: resolving the banner; fatal, still zero network create calls
    progress.on_phase(Phase::ResolvingImage).await;
    let banner = match images.resolve(&validated.banner_reference).await {
        Ok(b) => b,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };

    // Phase: the single multipart create call
    progress.on_phase(Phase::CreatingSchedule).await;
    let request = CreateScheduleRequest {
        trip_name: validated.trip_name.clone(),
        travel_mode: validated.travel_mode,
        visibility: validated.visibility,
        location_from: validated.location_from,
        location_to: validated.location_to,
        dates_from: dates::iso_string(validated.from_date),
        dates_end: dates::iso_string(validated.to_date),
        number_of_days: validated.number_of_days,
        banner: banner.path,
    };

    let schedule_id = match service.create_schedule(&request).await {
        Ok(id) => id,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };
    progress.on_schedule_created(&schedule_id).await;
    tracing::info!(schedule_id = %schedule_id, "schedule created");

    // Phase: attach each day, strictly one at a time in ascending order.
    // The schedule already exists server-side, so from here on a failure
    // is a partial submission and nothing is rolled back.
    progress.on_phase(Phase::AttachingDays).await;
    let attachments = day_attachments(&validated);
    let mut days_attached = 0;

    for attachment in &attachments {
        progress.on_day(attachment.day_id, DayStatus::Started).await;

        match service.attach_day(&schedule_id, attachment).await {
            Ok(()) => {
                progress.on_day(attachment.day_id, DayStatus::Success).await;
                days_attached += 1;
            }
            Err(e) => {
                let partial = Error::PartialSubmission {
                    schedule_id: schedule_id.clone(),
                    day: attachment.day_id,
                    message: e.to_string(),
                };
                progress
                    .on_day(attachment.day_id, DayStatus::Failed(e.to_string()))
                    .await;
                progress.on_error(&partial).await;
                return Err(partial);
            }
        }
    }

    progress.on_phase(Phase::Complete).await;

    Ok(SubmissionReceipt {
        schedule_id,
        days_attached,
    })
}

/// Submit the session's draft end to end.
///
/// Takes the read-only snapshot, marks the session busy for the
/// duration, and on success marks the draft submitted and resets it.
/// On failure the draft is preserved for correction and retry.
pub async fn submit(
    session: &mut DraftSession,
    service: &dyn ScheduleService,
    images: &ImageResolver,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionReceipt> {
    let snapshot = session.begin_submission()?;
    let result = execute_submission(&snapshot, service, images, progress).await;
    session.finish_submission(result.is_ok());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::validate::ValidatedDay;
    use crate::types::{GeoPoint, TravelMode, Visibility};
    use chrono::NaiveDate;

    fn validated_with_days(count: u32) -> ValidatedDraft {
        let days = (1..=count)
            .map(|id| ValidatedDay {
                id,
                description: format!("day {id}"),
                coordinates: GeoPoint::new(f64::from(id), f64::from(id) * 10.0),
            })
            .collect();

        ValidatedDraft {
            banner_reference: "/tmp/banner.jpg".to_string(),
            trip_name: "Goa Trip".to_string(),
            travel_mode: TravelMode::Car,
            visibility: Visibility::Public,
            location_from: GeoPoint::new(12.97, 77.59),
            location_to: GeoPoint::new(15.49, 73.82),
            from_date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2025, 2, 12).unwrap(),
            number_of_days: 3,
            days,
        }
    }

    #[test]
    fn chain_links_each_day_to_the_next() {
        let attachments = day_attachments(&validated_with_days(3));

        assert_eq!(attachments.len(), 3);
        assert_eq!(attachments[0].from, GeoPoint::new(1.0, 10.0));
        assert_eq!(attachments[0].to, GeoPoint::new(2.0, 20.0));
        assert_eq!(attachments[1].to, GeoPoint::new(3.0, 30.0));
    }

    #[test]
    fn last_day_closes_on_itself() {
        let attachments = day_attachments(&validated_with_days(3));
        let last = attachments.last().unwrap();
        assert_eq!(last.from, last.to);
    }

    #[test]
    fn single_day_trip_is_a_self_loop() {
        let attachments = day_attachments(&validated_with_days(1));
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].from, attachments[0].to);
    }

    #[test]
    fn attach_dates_use_unpadded_day_month_year() {
        let attachments = day_attachments(&validated_with_days(3));
        let dates: Vec<&str> = attachments.iter().map(|a| a.date.as_str()).collect();
        assert_eq!(dates, vec!["10-2-2025", "11-2-2025", "12-2-2025"]);
    }
}
