//! Qualitative Bands for Individual Readings
//!
//! A band is the ordinal tier a single reading falls into. Pollutant and
//! proximity tables share the five-step scale
//!
//! ```text
//! Good 🟢 → Normal 🟡 → Poor 🟠 → Very Poor 🔴 → Severe 🟣
//! ```
//!
//! while humidity uses its own comfort scale (Dry, Ideal, Humid) with no
//! colour marker.

use core::fmt;

/// Qualitative tier for one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Band {
    /// Best tier on the pollutant scale
    Good,
    /// Acceptable
    Normal,
    /// Unhealthy for sensitive groups
    Poor,
    /// Unhealthy
    VeryPoor,
    /// Worst tier on the pollutant scale
    Severe,
    /// Humidity at or below 30%
    Dry,
    /// Humidity in the comfort window
    Ideal,
    /// Humidity above 60%
    Humid,
}

impl Band {
    /// Plain label
    pub const fn label(self) -> &'static str {
        match self {
            Band::Good => "Good",
            Band::Normal => "Normal",
            Band::Poor => "Poor",
            Band::VeryPoor => "Very Poor",
            Band::Severe => "Severe",
            Band::Dry => "Dry",
            Band::Ideal => "Ideal",
            Band::Humid => "Humid",
        }
    }

    /// Colour marker shown next to the label
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Band::Good => Some("🟢"),
            Band::Normal => Some("🟡"),
            Band::Poor => Some("🟠"),
            Band::VeryPoor => Some("🔴"),
            Band::Severe => Some("🟣"),
            Band::Dry | Band::Ideal | Band::Humid => None,
        }
    }

    /// Label with its marker, e.g. `"Very Poor 🔴"`
    pub const fn decorated(self) -> &'static str {
        match self {
            Band::Good => "Good 🟢",
            Band::Normal => "Normal 🟡",
            Band::Poor => "Poor 🟠",
            Band::VeryPoor => "Very Poor 🔴",
            Band::Severe => "Severe 🟣",
            Band::Dry => "Dry",
            Band::Ideal => "Ideal",
            Band::Humid => "Humid",
        }
    }

    /// Ordinal severity, 0 is best
    ///
    /// Humidity bands rank by distance from the comfort window, so Dry and
    /// Humid share a rank.
    pub const fn severity(self) -> u8 {
        match self {
            Band::Good | Band::Ideal => 0,
            Band::Normal | Band::Dry | Band::Humid => 1,
            Band::Poor => 2,
            Band::VeryPoor => 3,
            Band::Severe => 4,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction in which a metric gets worse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Larger readings are worse (pollutant concentrations)
    HigherIsWorse,
    /// Smaller readings are worse (distance to industry)
    LowerIsWorse,
    /// Worst at both extremes (humidity)
    Comfort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorated_label_combines_label_and_marker() {
        for band in [Band::Good, Band::Normal, Band::Poor, Band::VeryPoor, Band::Severe] {
            let marker = band.marker().unwrap();
            assert!(band.decorated().starts_with(band.label()));
            assert!(band.decorated().ends_with(marker));
        }
    }

    #[test]
    fn humidity_bands_are_undecorated() {
        assert_eq!(Band::Dry.decorated(), "Dry");
        assert_eq!(Band::Humid.marker(), None);
    }

    #[test]
    fn pollutant_scale_is_ordered() {
        let scale = [Band::Good, Band::Normal, Band::Poor, Band::VeryPoor, Band::Severe];
        assert!(scale.windows(2).all(|w| w[0].severity() < w[1].severity()));
    }
}
