//! Combines rainfall, river and history factors into a 0-100 score and risk level.

use super::{recommendations_for, AnalysisResult, Breakdown, Observation, RiskLevel};
use crate::reference::{FloodRepository, ReferenceCatalog};
use tracing::debug;

const RAINFALL_CAP: f64 = 40.0;
const HISTORY_CAP: f64 = 30.0;
/// Most the latest flood season can add on top of the location's base risk
const RECENT_EVENTS_CAP: f64 = 5.0;
const POINTS_PER_RECENT_EVENT: f64 = 0.5;

/// Amount breakpoints (mm, inclusive upper bound) and their base points
const RAINFALL_BANDS: [(f64, f64); 4] = [(10.0, 5.0), (30.0, 15.0), (60.0, 28.0), (100.0, 35.0)];

fn rainfall_base_points(rainfall_mm: f64) -> f64 {
    // NaN and negative amounts land in the first band
    let mm = rainfall_mm.max(0.0);
    RAINFALL_BANDS
        .iter()
        .find(|(upper, _)| mm <= *upper)
        .map(|(_, points)| *points)
        .unwrap_or(RAINFALL_CAP)
}

pub struct RiskEngine<R> {
    repository: R,
}

impl<R: FloodRepository> RiskEngine<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Score one observation. Total: unknown locations contribute no history points.
    pub fn analyze(&self, observation: &Observation) -> AnalysisResult {
        let rainfall_points = self.rainfall_points(observation);
        let river_points = observation.river_level.points();
        let history_points = self.history_points(&observation.location);

        let total = (rainfall_points + f64::from(river_points) + history_points).round();
        let score = total.clamp(0.0, 100.0) as u8;
        let risk_level = RiskLevel::from_score(score);

        debug!(
            location = %observation.location,
            rainfall_points,
            river_points,
            history_points,
            score,
            level = %risk_level,
            "flood risk analyzed"
        );

        AnalysisResult {
            score,
            risk_level,
            breakdown: Breakdown {
                rainfall_points: rainfall_points.round() as u8,
                river_points,
                history_points: history_points.round() as u8,
            },
            recommendations: recommendations_for(risk_level)
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }

    fn rainfall_points(&self, observation: &Observation) -> f64 {
        let base = rainfall_base_points(observation.rainfall);
        (base * observation.rainfall_level.multiplier()).min(RAINFALL_CAP)
    }

    fn history_points(&self, key: &str) -> f64 {
        let Some(location) = self.repository.find_location(key) else {
            debug!(location = %key, "location not in catalog; no history points");
            return 0.0;
        };
        let mut points = (f64::from(location.historical_risk) / 100.0 * HISTORY_CAP).min(HISTORY_CAP);
        if let Some(latest) = self.repository.find_history(key).first() {
            points += (f64::from(latest.flood_events) * POINTS_PER_RECENT_EVENT).min(RECENT_EVENTS_CAP);
        }
        points.clamp(0.0, HISTORY_CAP)
    }
}

impl Default for RiskEngine<&'static ReferenceCatalog> {
    fn default() -> Self {
        Self::new(ReferenceCatalog::shared())
    }
}

/// Score against the built-in catalog.
pub fn analyze_flood_risk(observation: &Observation) -> AnalysisResult {
    RiskEngine::default().analyze(observation)
}
