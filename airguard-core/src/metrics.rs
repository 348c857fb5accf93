//! Measured Quantities
//!
//! Every reading the system understands is one of nine metrics. Their
//! declaration order is the feature vector order the aggregate model was
//! trained on:
//!
//! ```text
//! slot  metric                 unit
//! 0     temperature            °C
//! 1     humidity               %
//! 2     PM2.5                  μg/m³
//! 3     PM10                   μg/m³
//! 4     NO₂                    ppb
//! 5     SO₂                    ppb
//! 6     CO                     ppm
//! 7     industrial proximity   km
//! 8     population density     people/km²
//! ```
//!
//! Seven of them carry a threshold table (see [`crate::thresholds`]).
//! Temperature and population density are model inputs only.

use core::fmt;
use core::str::FromStr;

use crate::errors::UnknownMetric;

/// A measured environmental quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Metric {
    /// Ambient air temperature (°C)
    Temperature,
    /// Relative humidity (%)
    Humidity,
    /// Fine particulate matter ≤2.5 μm (μg/m³)
    Pm25,
    /// Particulate matter ≤10 μm (μg/m³)
    Pm10,
    /// Nitrogen dioxide (ppb)
    No2,
    /// Sulfur dioxide (ppb)
    So2,
    /// Carbon monoxide (ppm)
    Co,
    /// Distance to the nearest industrial area (km)
    IndustrialProximity,
    /// Population density (people/km²)
    PopulationDensity,
}

impl Metric {
    /// All metrics in feature vector order
    pub const ALL: [Metric; 9] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::Pm25,
        Metric::Pm10,
        Metric::No2,
        Metric::So2,
        Metric::Co,
        Metric::IndustrialProximity,
        Metric::PopulationDensity,
    ];

    /// Metrics with a threshold table, in display order
    pub const CLASSIFIED: [Metric; 7] = [
        Metric::IndustrialProximity,
        Metric::Humidity,
        Metric::Pm10,
        Metric::Pm25,
        Metric::No2,
        Metric::So2,
        Metric::Co,
    ];

    /// Slot of this metric in the feature vector
    pub const fn feature_index(self) -> usize {
        match self {
            Metric::Temperature => 0,
            Metric::Humidity => 1,
            Metric::Pm25 => 2,
            Metric::Pm10 => 3,
            Metric::No2 => 4,
            Metric::So2 => 5,
            Metric::Co => 6,
            Metric::IndustrialProximity => 7,
            Metric::PopulationDensity => 8,
        }
    }

    /// Stable snake_case key
    pub const fn name(self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::Pm25 => "pm25",
            Metric::Pm10 => "pm10",
            Metric::No2 => "no2",
            Metric::So2 => "so2",
            Metric::Co => "co",
            Metric::IndustrialProximity => "industrial_proximity",
            Metric::PopulationDensity => "population_density",
        }
    }

    /// Unit of measure
    pub const fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::Pm25 | Metric::Pm10 => "μg/m³",
            Metric::No2 | Metric::So2 => "ppb",
            Metric::Co => "ppm",
            Metric::IndustrialProximity => "km",
            Metric::PopulationDensity => "people/km²",
        }
    }

    /// Whether a negative reading is physically meaningful
    pub const fn allows_negative(self) -> bool {
        matches!(self, Metric::Temperature)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALIASES: &[(&str, Metric)] = &[
            ("temperature", Metric::Temperature),
            ("temp", Metric::Temperature),
            ("humidity", Metric::Humidity),
            ("pm25", Metric::Pm25),
            ("pm2.5", Metric::Pm25),
            ("pm2_5", Metric::Pm25),
            ("pm10", Metric::Pm10),
            ("no2", Metric::No2),
            ("no₂", Metric::No2),
            ("so2", Metric::So2),
            ("so₂", Metric::So2),
            ("co", Metric::Co),
            ("industrial_proximity", Metric::IndustrialProximity),
            ("proximity_to_industrial_areas", Metric::IndustrialProximity),
            ("proximity", Metric::IndustrialProximity),
            ("population_density", Metric::PopulationDensity),
            ("population", Metric::PopulationDensity),
        ];

        let key = s.trim();
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(key))
            .map(|&(_, metric)| metric)
            .ok_or(UnknownMetric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_index_matches_declaration_order() {
        for (slot, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.feature_index(), slot);
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("PM2.5".parse::<Metric>(), Ok(Metric::Pm25));
        assert_eq!(" so₂ ".parse::<Metric>(), Ok(Metric::So2));
        assert_eq!("Proximity".parse::<Metric>(), Ok(Metric::IndustrialProximity));
        assert_eq!("ozone".parse::<Metric>(), Err(UnknownMetric));
    }

    #[test]
    fn name_round_trips_through_parse() {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>(), Ok(metric));
        }
    }
}
