//! Heightmap loading, sampling, and slope derivation

use std::path::Path;

use scree_core::{Result, ScreeError};

/// A grayscale heightmap with bilinear sampling
pub struct Heightmap {
    /// Row-major height values normalized to [0..1]
    heights: Vec<f32>,
    /// Width in pixels
    pub width: u32,
    /// Depth (height) in pixels
    pub depth: u32,
}

impl Heightmap {
    /// Load a heightmap from a grayscale PNG file.
    /// Values are normalized to [0..1] regardless of bit depth.
    pub fn from_png(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|e| {
            ScreeError::HeightmapError(format!(
                "Failed to load heightmap '{}': {}",
                path.display(),
                e
            ))
        })?;

        let gray = img.into_luma16();
        let width = gray.width();
        let depth = gray.height();

        let heights: Vec<f32> = gray.pixels().map(|p| p.0[0] as f32 / 65535.0).collect();

        Ok(Self {
            heights,
            width,
            depth,
        })
    }

    /// Create a heightmap from raw float data (for testing)
    pub fn from_raw(heights: Vec<f32>, width: u32, depth: u32) -> Self {
        assert_eq!(heights.len(), (width * depth) as usize);
        Self {
            heights,
            width,
            depth,
        }
    }

    /// Bilinear sample at normalized UV coordinates (0..1, 0..1).
    /// Returns interpolated height in [0..1].
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        // Degenerate single-row/column maps have nothing to interpolate
        if self.width < 2 || self.depth < 2 {
            return self.heights.first().copied().unwrap_or(0.0);
        }

        let fx = u * (self.width - 1) as f32;
        let fz = v * (self.depth - 1) as f32;

        let x0 = (fx as u32).min(self.width - 2);
        let z0 = (fz as u32).min(self.depth - 2);
        let x1 = x0 + 1;
        let z1 = z0 + 1;

        let tx = fx - x0 as f32;
        let tz = fz - z0 as f32;

        let h00 = self.get(x0, z0);
        let h10 = self.get(x1, z0);
        let h01 = self.get(x0, z1);
        let h11 = self.get(x1, z1);

        let h0 = h00 * (1.0 - tx) + h10 * tx;
        let h1 = h01 * (1.0 - tx) + h11 * tx;

        h0 * (1.0 - tz) + h1 * tz
    }

    /// Compute the surface normal at a UV position using finite differences.
    pub fn compute_normal(
        &self,
        u: f32,
        v: f32,
        world_width: f32,
        world_depth: f32,
        height_scale: f32,
    ) -> [f32; 3] {
        let eps_u = 1.0 / (self.width as f32);
        let eps_v = 1.0 / (self.depth as f32);

        let h_left = self.sample((u - eps_u).max(0.0), v) * height_scale;
        let h_right = self.sample((u + eps_u).min(1.0), v) * height_scale;
        let h_down = self.sample(u, (v - eps_v).max(0.0)) * height_scale;
        let h_up = self.sample(u, (v + eps_v).min(1.0)) * height_scale;

        let dx = (h_right - h_left) / (2.0 * eps_u * world_width);
        let dz = (h_up - h_down) / (2.0 * eps_v * world_depth);

        // Normal = normalize(-dh/dx, 1, -dh/dz)
        let nx = -dx;
        let ny = 1.0;
        let nz = -dz;
        let len = (nx * nx + ny * ny + nz * nz).sqrt();

        [nx / len, ny / len, nz / len]
    }

    /// Slope angle in degrees at a UV position: 0 = flat, 90 = vertical.
    ///
    /// Derived from the surface normal; the angle between the normal and
    /// world up equals the angle between the surface and the horizontal.
    pub fn steepness(
        &self,
        u: f32,
        v: f32,
        world_width: f32,
        world_depth: f32,
        height_scale: f32,
    ) -> f32 {
        let normal = self.compute_normal(u, v, world_width, world_depth, height_scale);
        normal[1].clamp(-1.0, 1.0).acos().to_degrees()
    }

    fn get(&self, x: u32, z: u32) -> f32 {
        self.heights[(z * self.width + x) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_sampling_returns_correct_values() {
        // 3x3 heightmap: center pixel is 1.0, edges are 0.0
        let heights = vec![
            0.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 0.0,
        ];
        let hm = Heightmap::from_raw(heights, 3, 3);

        let center = hm.sample(0.5, 0.5);
        assert!((center - 1.0).abs() < 0.01);

        let corner = hm.sample(0.0, 0.0);
        assert!((corner - 0.0).abs() < 0.01);
    }

    #[test]
    fn flat_heightmap_has_zero_steepness() {
        let hm = Heightmap::from_raw(vec![0.5; 16], 4, 4);
        let angle = hm.steepness(0.5, 0.5, 10.0, 10.0, 20.0);
        assert!(angle.abs() < 0.01);
    }

    #[test]
    fn ramp_heightmap_has_expected_steepness() {
        // Height rises linearly from 0 to 1 left to right, so sample(u, v)
        // equals u. With height_scale == world_width the gradient is 1,
        // which is a 45 degree incline.
        let mut heights = Vec::with_capacity(64);
        for _z in 0..8 {
            for x in 0..8 {
                heights.push(x as f32 / 7.0);
            }
        }
        let hm = Heightmap::from_raw(heights, 8, 8);

        let angle = hm.steepness(0.5, 0.5, 10.0, 10.0, 10.0);
        assert!((angle - 45.0).abs() < 0.1);
    }

    #[test]
    fn normal_computation_on_flat_terrain() {
        let hm = Heightmap::from_raw(vec![0.5; 9], 3, 3);
        let normal = hm.compute_normal(0.5, 0.5, 10.0, 10.0, 10.0);
        assert!((normal[0]).abs() < 0.01);
        assert!((normal[1] - 1.0).abs() < 0.01);
        assert!((normal[2]).abs() < 0.01);
    }
}
