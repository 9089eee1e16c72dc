//! Dashboard flow: validate the form, score it, then attach the deployment
//! plan and any emergency alert. The only place those outputs meet.

use crate::alert::EmergencyAlert;
use crate::reference::FloodRepository;
use crate::resources::{get_resource_allocation, ResourceAllocation};
use crate::risk::{AnalysisResult, RiskEngine};
use crate::session::Session;
use crate::validation::{ObservationInput, ValidationError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub operator: String,
    pub location_name: String,
    pub headline: &'static str,
    pub summary: &'static str,
    pub analysis: AnalysisResult,
    pub resources: &'static [ResourceAllocation],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<EmergencyAlert>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("observation rejected: {0}")]
    Validation(#[from] ValidationError),
}

pub struct Dashboard<R> {
    session: Session,
    engine: RiskEngine<R>,
}

impl<R: FloodRepository> Dashboard<R> {
    pub fn new(session: Session, engine: RiskEngine<R>) -> Self {
        Self { session, engine }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn submit(&self, input: &ObservationInput) -> Result<DashboardReport, DashboardError> {
        let observation = input.validate().inspect_err(|e| {
            warn!(operator = %self.session.operator(), error = %e, "observation rejected");
        })?;

        let location_name = self
            .engine
            .repository()
            .find_location(&observation.location)
            .map(|l| l.name.clone())
            .unwrap_or_else(|| observation.location.clone());

        let analysis = self.engine.analyze(&observation);
        let resources = get_resource_allocation(analysis.risk_level);
        let alert = EmergencyAlert::for_result(&analysis, &location_name);

        info!(
            operator = %self.session.operator(),
            location = %observation.location,
            score = analysis.score,
            level = %analysis.risk_level,
            alert = alert.is_some(),
            "analysis complete"
        );

        Ok(DashboardReport {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            operator: self.session.operator().to_string(),
            location_name,
            headline: analysis.risk_level.label(),
            summary: analysis.risk_level.summary(),
            resources,
            alert,
            analysis,
        })
    }
}
