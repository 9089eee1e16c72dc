//! Reference data: monitored locations and their recent flood history.
//! Read-only; the scoring engine reaches it through [`FloodRepository`].

mod catalog;

use crate::risk::RiskLevel;
use serde::{Deserialize, Serialize};

pub use catalog::{CatalogError, ReferenceCatalog};

/// A monitored location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    /// Region (state) label
    pub state: String,
    /// Historical flood risk, percent (0-100)
    pub historical_risk: u8,
}

impl Location {
    /// Coarse badge for location pickers; never used by scoring.
    pub fn risk_tier(&self) -> RiskLevel {
        if self.historical_risk > 70 {
            RiskLevel::High
        } else if self.historical_risk > 50 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Flood events recorded for one location in one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalFloodRecord {
    pub location: String,
    pub year: u16,
    pub flood_events: u32,
    /// Informational; not read by scoring
    pub average_severity: f64,
}

/// Lookup seam between the engine and wherever reference data lives.
///
/// `find_history` must return records newest-first: the engine weighs only
/// the first one.
pub trait FloodRepository {
    fn find_location(&self, key: &str) -> Option<&Location>;
    fn find_history(&self, key: &str) -> Vec<&HistoricalFloodRecord>;
}

impl<R: FloodRepository + ?Sized> FloodRepository for &R {
    fn find_location(&self, key: &str) -> Option<&Location> {
        (**self).find_location(key)
    }

    fn find_history(&self, key: &str) -> Vec<&HistoricalFloodRecord> {
        (**self).find_history(key)
    }
}
