//! Declared Input Ranges
//!
//! Bounds the collecting form enforces on each reading. The core classifies
//! values outside these ranges without complaint; the ranges are only used
//! when a caller asks for explicit validation.

// ===== CLIMATE =====

/// Lowest accepted air temperature (°C).
pub const TEMPERATURE_MIN_C: f32 = -5.0;

/// Highest accepted air temperature (°C).
pub const TEMPERATURE_MAX_C: f32 = 60.0;

/// Lowest accepted relative humidity (%).
pub const HUMIDITY_MIN_PCT: f32 = 0.0;

/// Highest accepted relative humidity (%).
///
/// Above 100% to tolerate supersaturated and drifting sensors.
pub const HUMIDITY_MAX_PCT: f32 = 130.0;

// ===== PARTICULATES =====

/// Highest accepted PM2.5 concentration (μg/m³).
pub const PM25_MAX_UG_M3: f32 = 300.0;

/// Highest accepted PM10 concentration (μg/m³).
pub const PM10_MAX_UG_M3: f32 = 320.0;

// ===== GASES =====

/// Highest accepted NO₂ concentration (ppb).
pub const NO2_MAX_PPB: f32 = 100.0;

/// Highest accepted SO₂ concentration (ppb), standard form.
pub const SO2_MAX_PPB: f32 = 50.0;

/// Highest accepted SO₂ concentration (ppb), region-based form.
pub const SO2_EXTENDED_MAX_PPB: f32 = 200.0;

/// Highest accepted CO concentration (ppm), standard form.
pub const CO_MAX_PPM: f32 = 100.0;

/// Highest accepted CO concentration (ppm), region-based form.
pub const CO_EXTENDED_MAX_PPM: f32 = 410.0;

// ===== SITE =====

/// Farthest accepted distance to an industrial area (km).
pub const PROXIMITY_MAX_KM: f32 = 50.0;

/// Highest accepted population density (people/km²).
pub const POPULATION_DENSITY_MAX: f32 = 100_000.0;
