//! Example 01: Predict from Artifacts
//!
//! Loads the fixture classifier, decoder and region table through a
//! configuration file, then shows per-metric bands and the overall
//! prediction for a reading, both as entered and for every region.
//!
//! ```bash
//! cargo run -p airguard-ml --example 01_predict_from_artifacts
//! ```

use std::path::PathBuf;

use airguard_core::AirReadings;
use airguard_ml::{ForestPredictor, PredictorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("predictor.json");

    let config = PredictorConfig::from_path(&config_path)?;
    let predictor = ForestPredictor::from_config(&config)?;

    let readings = AirReadings {
        temperature: 25.0,
        humidity: 50.0,
        pm25: 25.0,
        pm10: 50.0,
        no2: 50.0,
        so2: 30.0,
        co: 5.0,
        industrial_proximity: 8.0,
        population_density: 15_000.0,
    };

    println!("=== Per-metric bands ===");
    for entry in predictor.annotate(&readings) {
        println!(
            "{:<22} {:>8.1} {:<12} {}",
            entry.metric.name(),
            entry.value,
            entry.metric.unit(),
            entry.band.decorated()
        );
    }

    println!("\n=== Prediction ===");
    let shown = predictor.predict_and_present(&readings)?;
    println!("Predicted Air Quality: {}", shown.display_label);
    if let Some(text) = shown.guidance_text() {
        println!("\n{text}");
    }

    println!("\n=== By region ===");
    for region in predictor.regions().iter() {
        let shown = predictor.predict_for_region(&region.name, &readings)?;
        println!("{:<16} {}", region.name, shown.display_label);
    }

    Ok(())
}
