//! In-memory catalog: the built-in monitored cities, or a JSON file with the same shape.

use super::{FloodRepository, HistoricalFloodRecord, Location};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

static BUILTIN: OnceLock<ReferenceCatalog> = OnceLock::new();

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    locations: Vec<Location>,
    /// Newest-first per location
    #[serde(default)]
    history: Vec<HistoricalFloodRecord>,
}

fn location(id: &str, name: &str, state: &str, historical_risk: u8) -> Location {
    Location {
        id: id.to_string(),
        name: name.to_string(),
        state: state.to_string(),
        historical_risk,
    }
}

fn record(location: &str, year: u16, flood_events: u32, average_severity: f64) -> HistoricalFloodRecord {
    HistoricalFloodRecord {
        location: location.to_string(),
        year,
        flood_events,
        average_severity,
    }
}

impl ReferenceCatalog {
    pub fn new(locations: Vec<Location>, history: Vec<HistoricalFloodRecord>) -> Self {
        Self { locations, history }
    }

    /// The fifteen monitored cities and their recent flood seasons.
    pub fn builtin() -> Self {
        let locations = vec![
            location("mumbai", "Mumbai", "Maharashtra", 85),
            location("chennai", "Chennai", "Tamil Nadu", 78),
            location("kolkata", "Kolkata", "West Bengal", 72),
            location("delhi", "Delhi", "Delhi NCR", 45),
            location("bangalore", "Bangalore", "Karnataka", 55),
            location("hyderabad", "Hyderabad", "Telangana", 60),
            location("ahmedabad", "Ahmedabad", "Gujarat", 50),
            location("pune", "Pune", "Maharashtra", 48),
            location("jaipur", "Jaipur", "Rajasthan", 35),
            location("lucknow", "Lucknow", "Uttar Pradesh", 42),
            location("patna", "Patna", "Bihar", 88),
            location("guwahati", "Guwahati", "Assam", 92),
            location("kochi", "Kochi", "Kerala", 75),
            location("bhubaneswar", "Bhubaneswar", "Odisha", 70),
            location("surat", "Surat", "Gujarat", 65),
        ];
        let history = vec![
            record("mumbai", 2023, 8, 7.2),
            record("mumbai", 2022, 6, 6.5),
            record("mumbai", 2021, 5, 5.8),
            record("chennai", 2023, 7, 8.1),
            record("chennai", 2022, 4, 5.5),
            record("chennai", 2021, 9, 7.8),
            record("kolkata", 2023, 5, 6.0),
            record("kolkata", 2022, 4, 5.2),
            record("patna", 2023, 10, 8.5),
            record("patna", 2022, 8, 7.8),
            record("guwahati", 2023, 12, 9.0),
            record("guwahati", 2022, 11, 8.7),
            record("kochi", 2023, 6, 7.0),
            record("kochi", 2022, 5, 6.2),
        ];
        Self::new(locations, history)
    }

    /// Process-wide built-in catalog, built on first use.
    pub fn shared() -> &'static ReferenceCatalog {
        BUILTIN.get_or_init(Self::builtin)
    }

    /// Load `{"locations": [...], "history": [...]}`. History order is kept as written.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog: ReferenceCatalog = serde_json::from_str(&data)?;
        tracing::info!(
            path = %path.display(),
            locations = catalog.locations.len(),
            history = catalog.history.len(),
            "reference catalog loaded"
        );
        Ok(catalog)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn history(&self) -> &[HistoricalFloodRecord] {
        &self.history
    }
}

impl FloodRepository for ReferenceCatalog {
    fn find_location(&self, key: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == key)
    }

    fn find_history(&self, key: &str) -> Vec<&HistoricalFloodRecord> {
        self.history.iter().filter(|h| h.location == key).collect()
    }
}
