//! Constants for AirGuard Core
//!
//! Every numeric breakpoint and input bound lives here, with its unit in
//! the name and its source in the doc comment.
//!
//! ## Organization
//!
//! - **Thresholds**: band breakpoints for each classified metric
//! - **Ranges**: declared valid input range for each reading

/// Band breakpoints per metric (inclusive upper bounds).
pub mod thresholds;

/// Declared valid input ranges per metric.
pub mod ranges;
