//! Scree Resample - Grid resizing behind a pure interface
//!
//! The painter samples steepness at terrain-size resolution and needs it at
//! blend-map resolution. `Resampler` is the seam: `CpuResampler` satisfies
//! the contract headless, `GpuResampler` is the render-to-texture fast path
//! for large terrains.

mod cpu;
mod gpu;

pub use cpu::CpuResampler;
pub use gpu::GpuResampler;

use scree_core::{Grid, Result, ScreeError};

/// Sampling filter used when resizing a grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    #[default]
    Bilinear,
}

/// Resizes a scalar grid to an exact target resolution.
///
/// Implementations must return a grid whose dimensions equal the requested
/// target exactly, and must release any scratch resources before returning
/// on every path.
pub trait Resampler {
    fn resize(&self, grid: &Grid, width: u32, height: u32, filter: FilterMode) -> Result<Grid>;
}

/// Reject zero-sized resize targets before any work is done.
pub(crate) fn check_target(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ScreeError::InvalidTargetSize { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_shader_wgsl_parses() {
        let source = include_str!("blit.wgsl");
        naga::front::wgsl::parse_str(source).expect("blit.wgsl failed to parse");
    }

    #[test]
    fn zero_target_is_rejected() {
        assert!(check_target(0, 100).is_err());
        assert!(check_target(100, 0).is_err());
        assert!(check_target(1, 1).is_ok());
    }
}
