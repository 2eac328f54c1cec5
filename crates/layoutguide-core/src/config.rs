//! Tunable thresholds for the guidance engine.

use crate::error::{GuidanceError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default snap threshold in canvas units.
pub const SNAP_THRESHOLD: f64 = 8.0;
/// Default magnetic pull radius.
pub const MAGNETIC_THRESHOLD: f64 = 15.0;
/// Default maximum center distance for hovering a container from outside.
pub const HOVER_DISTANCE: f64 = 50.0;
/// Default exclusive upper bound for a detected spacing gap.
pub const SPACING_DETECTION: f64 = 30.0;
/// Default radius for alignment suggestions.
pub const SMART_ALIGN_THRESHOLD: f64 = 100.0;
/// Default minimum gap worth annotating.
pub const MEASUREMENT_MIN_DISTANCE: f64 = 20.0;
/// Default throttle window in milliseconds (~60 Hz).
pub const THROTTLE_MS: u64 = 16;

/// Immutable engine configuration.
///
/// Deserializing accepts any subset of fields; missing ones take the
/// documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    pub snap_threshold: f64,
    pub magnetic_threshold: f64,
    pub hover_distance: f64,
    pub spacing_detection: f64,
    pub smart_align_threshold: f64,
    pub measurement_min_distance: f64,
    pub throttle_ms: u64,
    /// Max center misalignment for two neighbors to form a spacing rhythm.
    pub alignment_tolerance: f64,
    /// Exclusive lower bound for a detected spacing gap.
    pub min_spacing: f64,
    /// Max orthogonal center offset for a neighbor to be measured.
    pub measurement_band: f64,
    /// Quantization step for alignment grouping.
    pub align_quantum: f64,
    /// Vertical offset of grid slot points below the container top.
    pub grid_slot_offset: f64,
    /// Only consider spacing neighbors within this radius of the pointer.
    pub spacing_search_radius: Option<f64>,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD,
            magnetic_threshold: MAGNETIC_THRESHOLD,
            hover_distance: HOVER_DISTANCE,
            spacing_detection: SPACING_DETECTION,
            smart_align_threshold: SMART_ALIGN_THRESHOLD,
            measurement_min_distance: MEASUREMENT_MIN_DISTANCE,
            throttle_ms: THROTTLE_MS,
            alignment_tolerance: 50.0,
            min_spacing: 10.0,
            measurement_band: 100.0,
            align_quantum: 10.0,
            grid_slot_offset: 20.0,
            spacing_search_radius: None,
        }
    }
}

impl GuidanceConfig {
    /// Parse a (possibly partial) JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Throttle window as a duration.
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Reject distances that are negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        let distances = [
            ("snap_threshold", self.snap_threshold),
            ("magnetic_threshold", self.magnetic_threshold),
            ("hover_distance", self.hover_distance),
            ("spacing_detection", self.spacing_detection),
            ("smart_align_threshold", self.smart_align_threshold),
            ("measurement_min_distance", self.measurement_min_distance),
            ("alignment_tolerance", self.alignment_tolerance),
            ("min_spacing", self.min_spacing),
            ("measurement_band", self.measurement_band),
            ("grid_slot_offset", self.grid_slot_offset),
        ];
        for (field, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(GuidanceError::InvalidConfig { field, value });
            }
        }
        if !self.align_quantum.is_finite() || self.align_quantum <= 0.0 {
            return Err(GuidanceError::InvalidConfig {
                field: "align_quantum",
                value: self.align_quantum,
            });
        }
        if let Some(radius) = self.spacing_search_radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(GuidanceError::InvalidConfig {
                    field: "spacing_search_radius",
                    value: radius,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GuidanceConfig::default();
        assert_eq!(config.snap_threshold, 8.0);
        assert_eq!(config.magnetic_threshold, 15.0);
        assert_eq!(config.hover_distance, 50.0);
        assert_eq!(config.spacing_detection, 30.0);
        assert_eq!(config.smart_align_threshold, 100.0);
        assert_eq!(config.measurement_min_distance, 20.0);
        assert_eq!(config.throttle(), Duration::from_millis(16));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = GuidanceConfig::from_json(r#"{ "snap_threshold": 4.0, "throttle_ms": 32 }"#).unwrap();
        assert_eq!(config.snap_threshold, 4.0);
        assert_eq!(config.throttle_ms, 32);
        assert_eq!(config.magnetic_threshold, MAGNETIC_THRESHOLD);
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let result = GuidanceConfig::from_json(r#"{ "hover_distance": -1.0 }"#);
        assert!(matches!(
            result,
            Err(GuidanceError::InvalidConfig { field: "hover_distance", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_quantum() {
        let config = GuidanceConfig {
            align_quantum: 0.0,
            ..GuidanceConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GuidanceError::InvalidConfig { field: "align_quantum", .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = GuidanceConfig::from_json("{ not json");
        assert!(matches!(result, Err(GuidanceError::ConfigParse(_))));
    }
}
