//! Submit command - validate a draft and drive the two-phase protocol

use crate::cli::progress::CliProgress;
use crate::cli::style::{check, Stylize};
use anstream::println;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tripflow::draft::DraftSession;
use tripflow::error::Result;
use tripflow::image::ImageResolver;
use tripflow::locate::{DayLocator, Geolocator, HttpPlacesService, LocationSource};
use tripflow::remote::HttpScheduleService;
use tripflow::submit;
use tripflow::types::{DraftPatch, GeoPoint, ScheduleDraft};

/// Stand-in for device geolocation: a position supplied on the
/// command line with `--at lat,lng`
struct CliPosition(GeoPoint);

#[async_trait]
impl Geolocator for CliPosition {
    async fn current_position(&self) -> Result<GeoPoint> {
        Ok(self.0)
    }
}

fn load_draft(path: &Path) -> Result<ScheduleDraft> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Fill unresolved coordinates before submission: each incomplete day
/// is searched by its description, and a missing trip origin falls back
/// to the supplied device position. Resolution is best-effort; anything
/// still missing is reported by validation.
async fn resolve_locations(session: &mut DraftSession, places_api: &str, at: Option<GeoPoint>) {
    let places = Arc::new(HttpPlacesService::new(places_api));
    let geolocator: Option<Arc<dyn Geolocator>> =
        at.map(|point| Arc::new(CliPosition(point)) as Arc<dyn Geolocator>);
    let locator = DayLocator::new(places, geolocator);

    let unresolved: Vec<(u32, String)> = session
        .draft()
        .days
        .iter()
        .filter(|day| day.coordinates().is_none())
        .map(|day| (day.id, day.description.clone()))
        .collect();

    for (day_id, description) in unresolved {
        if let Some(point) = locator
            .resolve(&[LocationSource::PlaceName(description)])
            .await
        {
            session.update_day_location(day_id, point);
        }
    }

    if session.draft().location_from.is_none() {
        if let Some(point) = locator.default_from().await {
            session.update(DraftPatch {
                location_from: Some(point),
                ..DraftPatch::default()
            });
        }
    }
}

/// Run the submit command
pub async fn run_submit(
    draft_path: &Path,
    api: &str,
    places_api: Option<&str>,
    at: Option<GeoPoint>,
) -> Result<()> {
    let mut session = DraftSession::open(load_draft(draft_path)?);

    resolve_locations(&mut session, places_api.unwrap_or(api), at).await;

    let service = HttpScheduleService::new(api);
    let images = ImageResolver::new();
    let progress = CliProgress;

    let receipt = submit::submit(&mut session, &service, &images, &progress).await?;

    println!();
    println!(
        "{} Submitted {} with {} day{}",
        check(),
        receipt.schedule_id.accent(),
        receipt.days_attached.accent(),
        if receipt.days_attached == 1 { "" } else { "s" }
    );

    Ok(())
}

/// Run the validate command: pre-network checks only
pub fn run_validate(draft_path: &Path) -> Result<()> {
    let draft = load_draft(draft_path)?;

    let validated = submit::validate_draft(&draft)?;
    println!(
        "{} Draft is ready to submit: {} day{} over {} calendar day{}",
        check(),
        validated.days.len().accent(),
        if validated.days.len() == 1 { "" } else { "s" },
        validated.number_of_days.accent(),
        if validated.number_of_days == 1 { "" } else { "s" },
    );
    Ok(())
}
