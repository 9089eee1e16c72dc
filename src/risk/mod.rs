//! Flood risk scoring: observation in, score, level, breakdown and recommendations out.

mod engine;
mod recommendations;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use engine::{analyze_flood_risk, RiskEngine};
pub use recommendations::recommendations_for;

/// Operator-judged rainfall intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RainfallLevel {
    Light,
    Moderate,
    Heavy,
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiverLevel {
    Normal,
    Rising,
    Danger,
}

/// Severity band derived from the 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl RainfallLevel {
    pub const ALL: [RainfallLevel; 4] = [Self::Light, Self::Moderate, Self::Heavy, Self::Extreme];

    pub fn as_str(&self) -> &'static str {
        match self {
            RainfallLevel::Light => "light",
            RainfallLevel::Moderate => "moderate",
            RainfallLevel::Heavy => "heavy",
            RainfallLevel::Extreme => "extreme",
        }
    }

    /// Scales the amount-based rainfall points
    pub fn multiplier(&self) -> f64 {
        match self {
            RainfallLevel::Light => 0.6,
            RainfallLevel::Moderate => 0.85,
            RainfallLevel::Heavy => 1.0,
            RainfallLevel::Extreme => 1.2,
        }
    }
}

impl RiverLevel {
    pub const ALL: [RiverLevel; 3] = [Self::Normal, Self::Rising, Self::Danger];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiverLevel::Normal => "normal",
            RiverLevel::Rising => "rising",
            RiverLevel::Danger => "danger",
        }
    }

    pub fn points(&self) -> u8 {
        match self {
            RiverLevel::Normal => 5,
            RiverLevel::Rising => 18,
            RiverLevel::Danger => 30,
        }
    }
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::Extreme];

    /// Bands: 0-30 low, 31-55 medium, 56-75 high, 76+ extreme.
    pub fn from_score(score: u8) -> Self {
        if score <= 30 {
            RiskLevel::Low
        } else if score <= 55 {
            RiskLevel::Medium
        } else if score <= 75 {
            RiskLevel::High
        } else {
            RiskLevel::Extreme
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Extreme => "extreme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseLevelError {
    pub kind: &'static str,
    pub value: String,
}

fn parse_level<T: Copy>(all: &[T], name: fn(&T) -> &'static str, kind: &'static str, s: &str) -> Result<T, ParseLevelError> {
    let wanted = s.trim();
    all.iter()
        .copied()
        .find(|level| name(level).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ParseLevelError {
            kind,
            value: s.to_string(),
        })
}

impl FromStr for RainfallLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(&Self::ALL, Self::as_str, "rainfall level", s)
    }
}

impl FromStr for RiverLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(&Self::ALL, Self::as_str, "river level", s)
    }
}

impl FromStr for RiskLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(&Self::ALL, Self::as_str, "risk level", s)
    }
}

impl fmt::Display for RainfallLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RiverLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operator-submitted snapshot for a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub location: String,
    /// Millimetres
    pub rainfall: f64,
    pub rainfall_level: RainfallLevel,
    pub river_level: RiverLevel,
}

/// Per-factor points; rainfall and history are rounded independently of the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub rainfall_points: u8,
    pub river_points: u8,
    pub history_points: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u8,
    pub risk_level: RiskLevel,
    pub breakdown: Breakdown,
    pub recommendations: Vec<String>,
}
