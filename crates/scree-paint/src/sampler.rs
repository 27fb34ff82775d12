//! Steepness sampling into a normalized grayscale grid

use scree_core::Grid;
use scree_terrain::TerrainSurface;

/// Sample the surface's steepness into a grid sized to the terrain's world
/// extents (one cell per world unit).
///
/// Each cell holds `clamp((90 - angle) / 90, 0, 1)`: flat ground is bright
/// (1.0), vertical cliffs are dark (0.0). The inversion is load-bearing —
/// the blend-map builder's threshold comparison assumes this polarity.
/// The raw angle is not range-checked, only the derived ratio is clamped.
pub fn steepness_grid<S: TerrainSurface + ?Sized>(surface: &S) -> Grid {
    let (size_x, size_y) = surface.size();
    let width = size_x.floor() as u32;
    let height = size_y.floor() as u32;

    let mut grid = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let u = x as f32 / size_x;
            let v = y as f32 / size_y;

            let angle = surface.steepness(u, v);
            let value = ((90.0 - angle) / 90.0).clamp(0.0, 1.0);
            grid.set(x, y, value);
        }
    }

    grid
}
