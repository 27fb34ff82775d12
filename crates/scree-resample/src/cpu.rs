//! Software resampling via the image crate

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};

use scree_core::{Grid, Result, ScreeError};

use crate::{check_target, FilterMode, Resampler};

/// Software resampler; the headless/test counterpart to `GpuResampler`.
#[derive(Default)]
pub struct CpuResampler;

impl Resampler for CpuResampler {
    fn resize(&self, grid: &Grid, width: u32, height: u32, filter: FilterMode) -> Result<Grid> {
        check_target(width, height)?;

        let src: ImageBuffer<Luma<f32>, Vec<f32>> =
            ImageBuffer::from_raw(grid.width, grid.height, grid.as_slice().to_vec()).ok_or_else(
                || ScreeError::RenderError("grid does not form a valid image buffer".to_string()),
            )?;

        let filter_type = match filter {
            FilterMode::Nearest => FilterType::Nearest,
            FilterMode::Bilinear => FilterType::Triangle,
        };

        let resized = imageops::resize(&src, width, height, filter_type);
        Ok(Grid::from_raw(resized.into_raw(), width, height))
    }
}
