//! Region profiles
//!
//! A region stands in for two readings the user would otherwise have to
//! know: population density and distance to industry. Profiles are data,
//! loaded from JSON so a deployment can ship its own table:
//!
//! ```json
//! {
//!   "regions": [
//!     { "name": "Urban Core", "population_density": 18000, "industrial_proximity": 4.0 }
//!   ]
//! }
//! ```

use std::{collections::HashMap, io::Read, path::Path};

use airguard_core::AirReadings;
use serde::{Deserialize, Serialize};

use crate::{loader::read_json, ArtifactError, ArtifactResult, PredictError, PredictResult};

/// Named area with default site readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Display name, matched case-insensitively
    pub name: String,
    /// Default population density (people/km²)
    pub population_density: f32,
    /// Default distance to industry (km)
    pub industrial_proximity: f32,
}

impl RegionProfile {
    /// Substitute this region's site readings
    pub fn apply(&self, readings: AirReadings) -> AirReadings {
        readings.with_site(self.industrial_proximity, self.population_density)
    }
}

#[derive(Deserialize)]
struct RegionFile {
    regions: Vec<RegionProfile>,
}

/// Keyed lookup of region profiles
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    profiles: Vec<RegionProfile>,
    index: HashMap<String, usize>,
}

impl RegionTable {
    /// Build from profiles, rejecting duplicates and impossible defaults
    pub fn new(profiles: Vec<RegionProfile>) -> ArtifactResult<Self> {
        let mut index = HashMap::with_capacity(profiles.len());

        for (i, profile) in profiles.iter().enumerate() {
            if profile.name.trim().is_empty() {
                return Err(ArtifactError::invalid(format!("region {i} has no name")));
            }
            for (field, value) in [
                ("population_density", profile.population_density),
                ("industrial_proximity", profile.industrial_proximity),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ArtifactError::invalid(format!(
                        "region {:?} has invalid {field}: {value}",
                        profile.name
                    )));
                }
            }
            if index.insert(key(&profile.name), i).is_some() {
                return Err(ArtifactError::invalid(format!("duplicate region {:?}", profile.name)));
            }
        }

        Ok(Self { profiles, index })
    }

    /// Parse a JSON region file
    pub fn from_json_str(json: &str) -> ArtifactResult<Self> {
        let file: RegionFile = serde_json::from_str(json)?;
        Self::new(file.regions)
    }

    /// Parse a JSON region file from a reader
    pub fn from_reader<R: Read>(reader: R) -> ArtifactResult<Self> {
        let file: RegionFile = serde_json::from_reader(reader)?;
        Self::new(file.regions)
    }

    /// Load a JSON region file from disk
    pub fn from_path(path: impl AsRef<Path>) -> ArtifactResult<Self> {
        let path = path.as_ref();
        let file: RegionFile = read_json(path)?;
        let table = Self::new(file.regions)?;
        log::info!("Loaded {} region profiles from {}", table.len(), path.display());
        Ok(table)
    }

    /// Look up a region by name
    pub fn get(&self, name: &str) -> Option<&RegionProfile> {
        self.index.get(&key(name)).map(|&i| &self.profiles[i])
    }

    /// Substitute a region's site readings, or fail if the name is unknown
    pub fn apply(&self, name: &str, readings: AirReadings) -> PredictResult<AirReadings> {
        let profile = self
            .get(name)
            .ok_or_else(|| PredictError::UnknownRegion { name: name.to_string() })?;
        Ok(profile.apply(readings))
    }

    /// Profiles in file order
    pub fn iter(&self) -> impl Iterator<Item = &RegionProfile> {
        self.profiles.iter()
    }

    /// Number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RegionTable {
        RegionTable::from_json_str(
            r#"{"regions":[
                {"name":"Urban Core","population_density":18000,"industrial_proximity":4.0},
                {"name":"Rural","population_density":120,"industrial_proximity":35.0}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = table();
        assert_eq!(table.get("urban core").unwrap().population_density, 18_000.0);
        assert_eq!(table.get(" RURAL ").unwrap().industrial_proximity, 35.0);
        assert!(table.get("Harbor").is_none());
    }

    #[test]
    fn apply_fills_site_slots() {
        let readings = table().apply("Rural", AirReadings::default()).unwrap();
        assert_eq!(readings.population_density, 120.0);
        assert_eq!(readings.industrial_proximity, 35.0);
        assert_eq!(readings.pm25, AirReadings::default().pm25);
    }

    #[test]
    fn unknown_region_is_an_error() {
        assert_eq!(
            table().apply("Harbor", AirReadings::default()),
            Err(PredictError::UnknownRegion { name: "Harbor".into() })
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let profile = RegionProfile {
            name: "Rural".into(),
            population_density: 1.0,
            industrial_proximity: 1.0,
        };
        let mut other = profile.clone();
        other.name = "rural".into();
        assert!(matches!(RegionTable::new(vec![profile, other]), Err(ArtifactError::Invalid(_))));
    }

    #[test]
    fn negative_defaults_are_rejected() {
        let profile = RegionProfile {
            name: "Nowhere".into(),
            population_density: -1.0,
            industrial_proximity: 1.0,
        };
        assert!(matches!(RegionTable::new(vec![profile]), Err(ArtifactError::Invalid(_))));
    }
}
