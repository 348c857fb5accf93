//! Band Breakpoints
//!
//! Each constant is the inclusive upper bound of a band. A reading equal to
//! a breakpoint belongs to the lower (better) band.

// ===== INDUSTRIAL PROXIMITY (km) =====
//
// Inverted polarity: shorter distance to industry means more exposure.

/// Within this distance of an industrial area the site is Severe (km).
pub const PROXIMITY_SEVERE_MAX_KM: f32 = 1.0;

/// Upper bound of the Poor proximity band (km).
pub const PROXIMITY_POOR_MAX_KM: f32 = 3.0;

/// Upper bound of the Normal proximity band (km). Farther is Good.
pub const PROXIMITY_NORMAL_MAX_KM: f32 = 10.0;

// ===== HUMIDITY (%) =====

/// At or below this relative humidity air is Dry (%).
pub const HUMIDITY_DRY_MAX_PCT: f32 = 30.0;

/// Upper bound of the Ideal comfort window (%). Above is Humid.
pub const HUMIDITY_IDEAL_MAX_PCT: f32 = 60.0;

// ===== PM10 (μg/m³) =====
//
// Source: 24-hour PM10 AQI breakpoints (US EPA, India NAQI)

/// Upper bound of Good PM10 (μg/m³).
pub const PM10_GOOD_MAX_UG_M3: f32 = 50.0;

/// Upper bound of Normal PM10 (μg/m³).
pub const PM10_NORMAL_MAX_UG_M3: f32 = 100.0;

/// Upper bound of Poor PM10 (μg/m³). Above is Severe.
pub const PM10_POOR_MAX_UG_M3: f32 = 250.0;

// ===== PM2.5 (μg/m³) =====
//
// Source: 24-hour PM2.5 AQI breakpoints (US EPA, 2012 revision)

/// Upper bound of Good PM2.5 (μg/m³).
pub const PM25_GOOD_MAX_UG_M3: f32 = 12.0;

/// Upper bound of Normal PM2.5 (μg/m³).
pub const PM25_NORMAL_MAX_UG_M3: f32 = 35.4;

/// Upper bound of Poor PM2.5 (μg/m³). Above is Severe.
pub const PM25_POOR_MAX_UG_M3: f32 = 55.4;

// ===== NO₂ (ppb) =====
//
// Source: 1-hour NO₂ AQI breakpoints (US EPA)

/// Upper bound of Good NO₂ (ppb).
pub const NO2_GOOD_MAX_PPB: f32 = 20.0;

/// Upper bound of Normal NO₂ (ppb).
pub const NO2_NORMAL_MAX_PPB: f32 = 53.0;

/// Upper bound of Poor NO₂ (ppb). Above is Severe.
pub const NO2_POOR_MAX_PPB: f32 = 75.0;

// ===== SO₂ (ppb) =====

/// Upper bound of Good SO₂ (ppb).
pub const SO2_GOOD_MAX_PPB: f32 = 10.0;

/// Upper bound of Normal SO₂ (ppb).
pub const SO2_NORMAL_MAX_PPB: f32 = 40.0;

/// Upper bound of Poor SO₂ (ppb). Above is Severe.
pub const SO2_POOR_MAX_PPB: f32 = 50.0;

// ===== CO (ppm) =====
//
// Source: 8-hour CO exposure guidance; 9 ppm matches the US NAAQS limit

/// Upper bound of Good CO (ppm).
pub const CO_GOOD_MAX_PPM: f32 = 1.0;

/// Upper bound of Normal CO (ppm).
pub const CO_NORMAL_MAX_PPM: f32 = 9.0;

/// Upper bound of Poor CO (ppm).
pub const CO_POOR_MAX_PPM: f32 = 35.0;

/// Upper bound of Very Poor CO (ppm). Above is Severe.
pub const CO_VERY_POOR_MAX_PPM: f32 = 70.0;
