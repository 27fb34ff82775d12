//! Scree Paint - Slope-thresholded terrain texture painting
//!
//! Composes the three stages: steepness sampling at terrain resolution,
//! resampling down to blend-map resolution, and one-hot blend weight
//! construction. `preview` runs the first two stages; `paint` runs all
//! three and commits the result to the surface. Both are synchronous and
//! run to completion once invoked.

pub mod builder;
pub mod config;
pub mod sampler;

pub use builder::build_blend_weights;
pub use config::PaintConfig;
pub use sampler::steepness_grid;

use image::GrayImage;

use scree_core::{Grid, Result};
use scree_resample::{FilterMode, Resampler};
use scree_terrain::TerrainSurface;

/// Produce the steepness map at blend-map resolution.
///
/// Stateless: for an unchanged surface and filter this returns an
/// identical grid on every call.
pub fn preview<S, R>(surface: &S, resampler: &R, filter: FilterMode) -> Result<Grid>
where
    S: TerrainSurface + ?Sized,
    R: Resampler + ?Sized,
{
    let grid = steepness_grid(surface);
    resampler.resize(
        &grid,
        surface.alphamap_width(),
        surface.alphamap_height(),
        filter,
    )
}

/// Render the preview as an 8-bit grayscale thumbnail for the GUI.
pub fn preview_image<S, R>(surface: &S, resampler: &R, filter: FilterMode) -> Result<GrayImage>
where
    S: TerrainSurface + ?Sized,
    R: Resampler + ?Sized,
{
    let grid = preview(surface, resampler, filter)?;
    let pixels: Vec<u8> = grid
        .as_slice()
        .iter()
        .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();

    // from_raw only fails on a length mismatch, which from_raw's own
    // invariant on Grid rules out
    Ok(GrayImage::from_raw(grid.width, grid.height, pixels)
        .unwrap_or_else(|| GrayImage::new(grid.width, grid.height)))
}

/// Threshold the surface's steepness into blend weights and commit them.
///
/// Validates the configuration before sampling anything, so an
/// out-of-range layer index leaves the terrain untouched. The commit
/// itself replaces all existing blend data for the covered cells; callers
/// in a GUI are expected to confirm with the user first.
pub fn paint<S, R>(surface: &mut S, resampler: &R, config: &PaintConfig, filter: FilterMode) -> Result<()>
where
    S: TerrainSurface + ?Sized,
    R: Resampler + ?Sized,
{
    config.validate(surface.alphamap_layers() as usize)?;

    let grid = preview(surface, resampler, filter)?;
    let weights = build_blend_weights(
        &grid,
        config,
        surface.alphamap_width(),
        surface.alphamap_height(),
        surface.alphamap_layers(),
    )?;

    surface.set_blend_weights(0, 0, &weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scree_core::ScreeError;
    use scree_resample::CpuResampler;
    use scree_terrain::BlendWeights;

    /// A surface with the same steepness everywhere, recording commits.
    struct UniformSurface {
        angle: f32,
        size: (f32, f32),
        alphamap: (u32, u32),
        layers: u32,
        committed: Option<BlendWeights>,
    }

    impl UniformSurface {
        fn new(angle: f32) -> Self {
            Self {
                angle,
                size: (16.0, 16.0),
                alphamap: (8, 8),
                layers: 2,
                committed: None,
            }
        }
    }

    impl TerrainSurface for UniformSurface {
        fn steepness(&self, _u: f32, _v: f32) -> f32 {
            self.angle
        }

        fn size(&self) -> (f32, f32) {
            self.size
        }

        fn alphamap_width(&self) -> u32 {
            self.alphamap.0
        }

        fn alphamap_height(&self) -> u32 {
            self.alphamap.1
        }

        fn alphamap_layers(&self) -> u32 {
            self.layers
        }

        fn layer_names(&self) -> Vec<String> {
            (0..self.layers).map(|i| format!("layer{}", i)).collect()
        }

        fn set_blend_weights(
            &mut self,
            _origin_row: u32,
            _origin_col: u32,
            weights: &BlendWeights,
        ) -> Result<()> {
            self.committed = Some(weights.clone());
            Ok(())
        }
    }

    #[test]
    fn flat_ground_samples_bright() {
        let surface = UniformSurface::new(0.0);
        let grid = steepness_grid(&surface);
        assert_eq!(grid.get(0, 0), 1.0);
        assert_eq!(grid.get(15, 15), 1.0);
    }

    #[test]
    fn vertical_cliffs_sample_dark() {
        let surface = UniformSurface::new(90.0);
        let grid = steepness_grid(&surface);
        assert_eq!(grid.get(7, 7), 0.0);
    }

    #[test]
    fn halfway_slope_samples_mid_gray() {
        let surface = UniformSurface::new(45.0);
        let grid = steepness_grid(&surface);
        assert_eq!(grid.get(3, 9), 0.5);
    }

    #[test]
    fn out_of_range_angles_clamp_to_unit_interval() {
        let grid = steepness_grid(&UniformSurface::new(-30.0));
        assert_eq!(grid.get(0, 0), 1.0);

        let grid = steepness_grid(&UniformSurface::new(180.0));
        assert_eq!(grid.get(0, 0), 0.0);
    }

    #[test]
    fn sampled_grid_matches_terrain_extents() {
        let mut surface = UniformSurface::new(10.0);
        surface.size = (12.7, 9.2);
        let grid = steepness_grid(&surface);
        assert_eq!(grid.width, 12);
        assert_eq!(grid.height, 9);
    }

    #[test]
    fn preview_matches_alphamap_resolution() {
        let surface = UniformSurface::new(20.0);
        let out = preview(&surface, &CpuResampler, FilterMode::Bilinear).unwrap();
        assert_eq!(out.width, 8);
        assert_eq!(out.height, 8);
    }

    #[test]
    fn preview_is_idempotent() {
        let surface = UniformSurface::new(33.0);
        let first = preview(&surface, &CpuResampler, FilterMode::Bilinear).unwrap();
        let second = preview(&surface, &CpuResampler, FilterMode::Bilinear).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn preview_image_is_thumbnail_sized() {
        let surface = UniformSurface::new(45.0);
        let img = preview_image(&surface, &CpuResampler, FilterMode::Nearest).unwrap();
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(0, 0).0[0], 128);
    }

    #[test]
    fn paint_commits_one_hot_weights() {
        let mut surface = UniformSurface::new(80.0);
        let config = PaintConfig::new(0, 1, 45.0);

        paint(&mut surface, &CpuResampler, &config, FilterMode::Nearest).unwrap();

        let weights = surface.committed.as_ref().unwrap();
        for row in 0..8 {
            for col in 0..8 {
                assert!(weights.is_one_hot(row, col));
                // 80 degrees is steeper than 45: slope layer everywhere
                assert_eq!(weights.get(row, col, 1), 1.0);
            }
        }
    }

    #[test]
    fn paint_aborts_without_commit_on_bad_layer_index() {
        let mut surface = UniformSurface::new(30.0);
        let config = PaintConfig::new(0, 5, 60.0);

        let err = paint(&mut surface, &CpuResampler, &config, FilterMode::Nearest);
        assert!(matches!(
            err,
            Err(ScreeError::InvalidLayerIndex {
                index: 5,
                layer_count: 2
            })
        ));
        assert!(surface.committed.is_none());
    }

    #[test]
    fn boundary_tie_break_paints_flat() {
        // Uniform 30 degree slope, threshold 60: grayscale is exactly
        // 60/90 and the comparison is strict, so every cell stays flat.
        let mut surface = UniformSurface::new(30.0);
        let config = PaintConfig::new(0, 1, 60.0);

        paint(&mut surface, &CpuResampler, &config, FilterMode::Nearest).unwrap();

        let weights = surface.committed.as_ref().unwrap();
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(weights.get(row, col, 0), 1.0);
                assert_eq!(weights.get(row, col, 1), 0.0);
            }
        }
    }
}
