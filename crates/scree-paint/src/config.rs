//! Paint configuration

use scree_core::{Result, ScreeError};

/// Layer selection and slope threshold for a paint or preview call.
///
/// Held by the caller for the length of an editing session and passed into
/// every operation explicitly; nothing here is global or persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintConfig {
    /// Layer painted where the ground is flatter than the threshold
    pub flat_layer: usize,
    /// Layer painted where the ground is steeper than the threshold
    pub slope_layer: usize,
    /// Slope cutoff in degrees, within [0, 90]
    pub threshold_degrees: f32,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            flat_layer: 0,
            slope_layer: 0,
            threshold_degrees: 60.0,
        }
    }
}

impl PaintConfig {
    pub fn new(flat_layer: usize, slope_layer: usize, threshold_degrees: f32) -> Self {
        Self {
            flat_layer,
            slope_layer,
            threshold_degrees,
        }
    }

    /// Check both layer indices against the terrain's layer count and the
    /// threshold against [0, 90]. Callers must validate before building or
    /// committing anything.
    pub fn validate(&self, layer_count: usize) -> Result<()> {
        if self.flat_layer >= layer_count {
            return Err(ScreeError::InvalidLayerIndex {
                index: self.flat_layer,
                layer_count,
            });
        }
        if self.slope_layer >= layer_count {
            return Err(ScreeError::InvalidLayerIndex {
                index: self.slope_layer,
                layer_count,
            });
        }
        if !(0.0..=90.0).contains(&self.threshold_degrees) {
            return Err(ScreeError::ThresholdOutOfRange(self.threshold_degrees));
        }
        Ok(())
    }
}
