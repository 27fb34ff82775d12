//! Blend weight construction from a thresholded steepness grid

use scree_core::{Grid, Result, ScreeError};
use scree_terrain::BlendWeights;

use crate::config::PaintConfig;

/// Threshold a resampled steepness grid into a one-hot blend weight array.
///
/// Cells whose grayscale value is strictly below `threshold / 90` get the
/// slope layer; everything else gets the flat layer. The grid is read with
/// the same (row, col) convention the output is written with.
///
/// Fails fast before producing anything: layer indices are checked against
/// `layer_count` and the grid must already match the target shape exactly.
pub fn build_blend_weights(
    grid: &Grid,
    config: &PaintConfig,
    width: u32,
    height: u32,
    layer_count: u32,
) -> Result<BlendWeights> {
    config.validate(layer_count as usize)?;

    if grid.width != width || grid.height != height {
        return Err(ScreeError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            got_width: grid.width,
            got_height: grid.height,
        });
    }

    let cutoff = config.threshold_degrees / 90.0;
    let mut weights = BlendWeights::new(width, height, layer_count);

    for row in 0..height {
        for col in 0..width {
            let g = grid.get(col, row);
            let layer = if g < cutoff {
                config.slope_layer
            } else {
                config.flat_layer
            };
            weights.set(row, col, layer as u32, 1.0);
        }
    }

    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_is_one_hot() {
        let mut grid = Grid::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                grid.set(x, y, (x + y) as f32 / 8.0);
            }
        }

        for threshold in [0.0, 30.0, 45.0, 60.0, 90.0] {
            let config = PaintConfig::new(0, 1, threshold);
            let weights = build_blend_weights(&grid, &config, 4, 4, 3).unwrap();
            for row in 0..4 {
                for col in 0..4 {
                    assert!(weights.is_one_hot(row, col), "threshold {}", threshold);
                }
            }
        }
    }

    #[test]
    fn cells_below_cutoff_get_the_slope_layer() {
        // Column 0 dark (steep), column 1 bright (flat)
        let grid = Grid::from_raw(vec![0.1, 0.9, 0.1, 0.9], 2, 2);
        let config = PaintConfig::new(0, 1, 45.0);

        let weights = build_blend_weights(&grid, &config, 2, 2, 2).unwrap();
        for row in 0..2 {
            assert_eq!(weights.get(row, 0, 1), 1.0);
            assert_eq!(weights.get(row, 0, 0), 0.0);
            assert_eq!(weights.get(row, 1, 0), 1.0);
            assert_eq!(weights.get(row, 1, 1), 0.0);
        }
    }

    #[test]
    fn equal_to_cutoff_goes_to_the_flat_layer() {
        // Strict less-than: a value exactly at the cutoff is flat.
        let grid = Grid::from_raw(vec![60.0 / 90.0], 1, 1);
        let config = PaintConfig::new(0, 1, 60.0);

        let weights = build_blend_weights(&grid, &config, 1, 1, 2).unwrap();
        assert_eq!(weights.get(0, 0, 0), 1.0);
        assert_eq!(weights.get(0, 0, 1), 0.0);
    }

    #[test]
    fn grid_is_read_untransposed() {
        // Non-square grid with a single dark cell at (col 2, row 0)
        let mut grid = Grid::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                grid.set(x, y, 1.0);
            }
        }
        grid.set(2, 0, 0.0);

        let config = PaintConfig::new(0, 1, 45.0);
        let weights = build_blend_weights(&grid, &config, 3, 2, 2).unwrap();

        assert_eq!(weights.get(0, 2, 1), 1.0);
        assert_eq!(weights.get(1, 2, 0), 1.0);
    }

    #[test]
    fn invalid_layer_index_aborts() {
        let grid = Grid::new(2, 2);
        let config = PaintConfig::new(0, 5, 60.0);
        assert!(build_blend_weights(&grid, &config, 2, 2, 2).is_err());
    }

    #[test]
    fn mismatched_grid_shape_aborts() {
        let grid = Grid::new(3, 3);
        let config = PaintConfig::new(0, 1, 60.0);
        let err = build_blend_weights(&grid, &config, 4, 4, 2);
        assert!(matches!(
            err,
            Err(scree_core::ScreeError::DimensionMismatch { .. })
        ));
    }
}
