//! SFAS engine: flood risk scoring for operator-entered observations.
//!
//! Modular structure:
//! - [`reference`] — Monitored locations and flood history behind a repository trait
//! - [`risk`] — Risk scoring engine and per-level recommendations
//! - [`resources`] — Resource deployment tables per risk level
//! - [`validation`] — Boundary checks for raw operator input
//! - [`alert`] — Headlines and emergency alerts for a result
//! - [`session`] / [`dashboard`] — Operator session and the analysis flow that combines outputs
//! - [`logging`] — Structured JSON logging
//! - [`cli`] — Command line and observation input for the binary

pub mod config;
pub mod reference;
pub mod risk;
pub mod resources;
pub mod validation;
pub mod alert;
pub mod session;
pub mod dashboard;
pub mod logging;
pub mod cli;

pub use config::EngineConfig;
pub use reference::{FloodRepository, ReferenceCatalog};
pub use risk::{analyze_flood_risk, AnalysisResult, Observation, RiskEngine, RiskLevel};
pub use resources::get_resource_allocation;
pub use validation::ObservationInput;
pub use alert::EmergencyAlert;
pub use session::Session;
pub use dashboard::{Dashboard, DashboardError, DashboardReport};
pub use logging::StructuredLogger;
