//! Property tests for the scoring engine over the built-in catalog.

use proptest::prelude::*;
use sfas_engine::reference::ReferenceCatalog;
use sfas_engine::risk::{analyze_flood_risk, Observation, RainfallLevel, RiskLevel, RiverLevel};

fn location_key() -> impl Strategy<Value = String> {
    let mut keys: Vec<String> = ReferenceCatalog::builtin()
        .locations()
        .iter()
        .map(|l| l.id.clone())
        .collect();
    keys.push("atlantis".to_string());
    prop::sample::select(keys)
}

fn rainfall_level() -> impl Strategy<Value = RainfallLevel> {
    prop::sample::select(RainfallLevel::ALL.to_vec())
}

fn river_level() -> impl Strategy<Value = RiverLevel> {
    prop::sample::select(RiverLevel::ALL.to_vec())
}

fn observation() -> impl Strategy<Value = Observation> {
    (location_key(), 0.0f64..500.0, rainfall_level(), river_level()).prop_map(
        |(location, rainfall, rainfall_level, river_level)| Observation {
            location,
            rainfall,
            rainfall_level,
            river_level,
        },
    )
}

proptest! {
    #[test]
    fn score_and_parts_stay_in_range(o in observation()) {
        let r = analyze_flood_risk(&o);
        prop_assert!(r.score <= 100);
        prop_assert!(r.breakdown.rainfall_points <= 40);
        prop_assert!(r.breakdown.river_points <= 30);
        prop_assert!(r.breakdown.history_points <= 30);
        prop_assert_eq!(r.risk_level, RiskLevel::from_score(r.score));
    }

    #[test]
    fn more_rain_never_lowers_score(o in observation(), extra in 0.0f64..200.0) {
        let wetter = Observation { rainfall: o.rainfall + extra, ..o.clone() };
        prop_assert!(analyze_flood_risk(&wetter).score >= analyze_flood_risk(&o).score);
    }

    #[test]
    fn higher_river_never_lowers_score(o in observation()) {
        let scores: Vec<u8> = RiverLevel::ALL
            .iter()
            .map(|river| analyze_flood_risk(&Observation { river_level: *river, ..o.clone() }).score)
            .collect();
        prop_assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn analysis_is_idempotent(o in observation()) {
        let a = serde_json::to_string(&analyze_flood_risk(&o)).unwrap();
        let b = serde_json::to_string(&analyze_flood_risk(&o)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn unknown_location_has_no_history(rainfall in 0.0f64..500.0, rl in rainfall_level(), rv in river_level()) {
        let o = Observation { location: "atlantis".into(), rainfall, rainfall_level: rl, river_level: rv };
        prop_assert_eq!(analyze_flood_risk(&o).breakdown.history_points, 0);
    }
}

#[test]
fn level_partition_covers_every_score() {
    for score in 0..=100u8 {
        let expected = match score {
            0..=30 => RiskLevel::Low,
            31..=55 => RiskLevel::Medium,
            56..=75 => RiskLevel::High,
            _ => RiskLevel::Extreme,
        };
        assert_eq!(RiskLevel::from_score(score), expected, "score {score}");
    }
    assert_eq!(RiskLevel::from_score(30), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(31), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(56), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(76), RiskLevel::Extreme);
}

#[test]
fn levels_parse_and_display() {
    for level in RiskLevel::ALL {
        assert_eq!(level.to_string().parse::<RiskLevel>(), Ok(level));
    }
    assert!("severe".parse::<RiskLevel>().is_err());
    assert_eq!(" DANGER ".parse::<RiverLevel>(), Ok(RiverLevel::Danger));
}
