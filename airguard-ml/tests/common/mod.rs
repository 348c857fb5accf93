//! Shared fixtures for integration tests
//!
//! The fixture forest has three trees splitting on PM2.5, CO, and
//! industrial proximity with NO₂. Its labels follow the label encoder's
//! alphabetical order: Good, Hazardous, Moderate, Poor.

#![allow(dead_code)]

use std::path::PathBuf;

use airguard_core::AirReadings;
use airguard_ml::{ClassLabels, ForestClassifier, ForestPredictor, RegionTable};

/// Directory holding the JSON fixtures
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Path of one fixture file
pub fn fixture(name: &str) -> PathBuf {
    fixture_dir().join(name)
}

pub fn forest() -> ForestClassifier {
    ForestClassifier::from_path(fixture("forest.json")).expect("fixture forest loads")
}

pub fn labels() -> ClassLabels {
    ClassLabels::from_path(fixture("labels.json")).expect("fixture labels load")
}

pub fn regions() -> RegionTable {
    RegionTable::from_path(fixture("regions.json")).expect("fixture regions load")
}

pub fn predictor() -> ForestPredictor {
    ForestPredictor::new(forest(), labels())
        .expect("fixture artifacts agree")
        .with_regions(regions())
}

/// Typical mid-pollution city reading
pub fn reference_readings() -> AirReadings {
    AirReadings {
        temperature: 25.0,
        humidity: 50.0,
        pm25: 25.0,
        pm10: 50.0,
        no2: 50.0,
        so2: 30.0,
        co: 5.0,
        industrial_proximity: 8.0,
        population_density: 15_000.0,
    }
}

/// Clean air far from industry
pub fn clean_readings() -> AirReadings {
    AirReadings {
        temperature: 18.0,
        humidity: 45.0,
        pm25: 5.0,
        pm10: 20.0,
        no2: 10.0,
        so2: 4.0,
        co: 0.5,
        industrial_proximity: 20.0,
        population_density: 800.0,
    }
}

/// Elevated pollution close to industry
pub fn polluted_readings() -> AirReadings {
    AirReadings {
        temperature: 31.0,
        humidity: 70.0,
        pm25: 45.0,
        pm10: 180.0,
        no2: 40.0,
        so2: 45.0,
        co: 20.0,
        industrial_proximity: 2.0,
        population_density: 22_000.0,
    }
}

/// Smog event next to an industrial site
pub fn hazardous_readings() -> AirReadings {
    AirReadings {
        temperature: 35.0,
        humidity: 25.0,
        pm25: 150.0,
        pm10: 300.0,
        no2: 90.0,
        so2: 48.0,
        co: 80.0,
        industrial_proximity: 0.5,
        population_density: 40_000.0,
    }
}
