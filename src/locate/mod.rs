//! Day location resolution.
//!
//! Coordinates for a day come from an ordered chain of best-effort
//! sources: an explicit map pick, a free-text place-name search, and
//! (for the first day's origin only) the device position. The first
//! source that produces a coordinate wins; a source that fails is
//! skipped without retry, and a fully unresolved location is left for
//! validation to catch later.

mod places;

pub use places::HttpPlacesService;

use crate::error::Result;
use crate::types::GeoPoint;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// One candidate source for a day's coordinates, in priority order
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSource {
    /// The user picked a point on the map
    Pick(GeoPoint),
    /// Search a remote places service by free-text name
    PlaceName(String),
    /// Fall back to the device position
    Device,
}

/// Remote place-name search
#[async_trait]
pub trait PlacesService: Send + Sync {
    /// Search by free-text name, returning ranked raw hits.
    ///
    /// Hits are raw JSON because providers disagree on coordinate key
    /// names; [`coordinates_from_place`] normalizes them.
    async fn search(&self, name: &str) -> Result<Vec<Value>>;
}

/// Device position lookup
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Current device position
    async fn current_position(&self) -> Result<GeoPoint>;
}

/// Extract a coordinate pair from a raw place-search hit.
///
/// Providers spell the keys differently (`lat`/`latitude`,
/// `lng`/`longitude`) and sometimes encode the numbers as strings;
/// all shape variance is absorbed here, at the resolver boundary.
#[must_use]
pub fn coordinates_from_place(hit: &Value) -> Option<GeoPoint> {
    let location = hit.get("location").unwrap_or(hit);
    let latitude = number_at(location, &["lat", "latitude"])?;
    let longitude = number_at(location, &["lng", "longitude"])?;
    Some(GeoPoint {
        latitude,
        longitude,
    })
}

fn number_at(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| {
        let v = value.get(key)?;
        v.as_f64()
            .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
    })
}

/// Resolver chain over the location sources
pub struct DayLocator {
    places: Arc<dyn PlacesService>,
    geolocator: Option<Arc<dyn Geolocator>>,
}

impl DayLocator {
    /// Build a locator over a places service and an optional device
    /// position source
    #[must_use]
    pub fn new(places: Arc<dyn PlacesService>, geolocator: Option<Arc<dyn Geolocator>>) -> Self {
        Self {
            places,
            geolocator,
        }
    }

    /// Resolve the first source that yields a coordinate.
    ///
    /// Failures are non-fatal: a failing source is logged and the next
    /// one is tried. `None` means every source came up empty.
    pub async fn resolve(&self, sources: &[LocationSource]) -> Option<GeoPoint> {
        for source in sources {
            match self.try_source(source).await {
                Ok(Some(point)) => return Some(point),
                Ok(None) => {}
                Err(e) => tracing::debug!(source = ?source, error = %e, "location source failed"),
            }
        }
        None
    }

    /// Default origin for day 1 when nothing is stored: device position
    pub async fn default_from(&self) -> Option<GeoPoint> {
        self.resolve(&[LocationSource::Device]).await
    }

    async fn try_source(&self, source: &LocationSource) -> Result<Option<GeoPoint>> {
        match source {
            LocationSource::Pick(point) => Ok(Some(*point)),
            LocationSource::PlaceName(name) => {
                if name.trim().is_empty() {
                    return Ok(None);
                }
                let hits = self.places.search(name).await?;
                Ok(hits.first().and_then(coordinates_from_place))
            }
            LocationSource::Device => match &self.geolocator {
                Some(geo) => geo.current_position().await.map(Some),
                None => Ok(None),
            },
        }
    }
}
