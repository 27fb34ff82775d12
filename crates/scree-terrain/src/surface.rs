//! The terrain surface abstraction the painter operates on

use scree_core::Result;

use crate::alphamap::BlendWeights;

/// A paintable terrain surface.
///
/// The painter only reads geometry (steepness, extents, alphamap shape,
/// layer names) and performs a single write: committing a blend weight
/// region. Hosts embedding the tool implement this for their own terrain
/// type; `TerrainAsset` is the built-in implementation.
pub trait TerrainSurface {
    /// Slope angle in degrees at normalized coordinates (u, v) in [0..1].
    /// 0 = flat, 90 = vertical.
    fn steepness(&self, u: f32, v: f32) -> f32;

    /// World-space extents (width, length).
    fn size(&self) -> (f32, f32);

    /// Blend map width in cells.
    fn alphamap_width(&self) -> u32;

    /// Blend map height in cells.
    fn alphamap_height(&self) -> u32;

    /// Number of texture layers.
    fn alphamap_layers(&self) -> u32;

    /// Names of the texture layers, in layer-index order.
    fn layer_names(&self) -> Vec<String>;

    /// Commit a blend weight region with its top-left cell at
    /// (`origin_row`, `origin_col`). Destructive: existing weights for the
    /// covered cells are replaced wholesale.
    fn set_blend_weights(
        &mut self,
        origin_row: u32,
        origin_col: u32,
        weights: &BlendWeights,
    ) -> Result<()>;
}
