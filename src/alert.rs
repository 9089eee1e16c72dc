//! Operator-facing wording for a result: headline per level and the emergency
//! alert raised for high and extreme risk.

use crate::risk::{AnalysisResult, RiskLevel};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
}

pub static EMERGENCY_CONTACTS: [EmergencyContact; 2] = [
    EmergencyContact {
        name: "NDRF Helpline",
        number: "1078",
    },
    EmergencyContact {
        name: "Disaster Control",
        number: "112",
    },
];

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
            RiskLevel::Extreme => "EXTREME RISK",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Conditions are stable. Continue routine monitoring.",
            RiskLevel::Medium => "Elevated risk detected. Activate preparedness measures.",
            RiskLevel::High => "Significant flood threat. Deploy emergency resources.",
            RiskLevel::Extreme => "Critical emergency! Immediate evacuation required.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyAlert {
    pub level: RiskLevel,
    pub title: &'static str,
    pub message: &'static str,
    pub banner: String,
    pub contacts: &'static [EmergencyContact],
}

impl EmergencyAlert {
    /// `None` below high risk.
    pub fn for_result(result: &AnalysisResult, location_name: &str) -> Option<Self> {
        let (title, message, banner_prefix) = match result.risk_level {
            RiskLevel::Low | RiskLevel::Medium => return None,
            RiskLevel::High => (
                "FLOOD ALERT",
                "High flood risk detected. Prepare for possible evacuation and monitor official channels.",
                "WARNING: Flood alert active for",
            ),
            RiskLevel::Extreme => (
                "FLOOD EMERGENCY WARNING",
                "EVACUATE IMMEDIATELY! Life-threatening flood conditions detected. Move to higher ground now.",
                "EMERGENCY: Immediate evacuation required for",
            ),
        };
        Some(Self {
            level: result.risk_level,
            title,
            message,
            banner: format!("{} {}", banner_prefix, location_name),
            contacts: &EMERGENCY_CONTACTS,
        })
    }

    pub fn is_evacuation(&self) -> bool {
        self.level == RiskLevel::Extreme
    }
}
