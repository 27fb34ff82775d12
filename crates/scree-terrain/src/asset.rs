//! Terrain data asset: heightmap, layers, and owned blend weight storage

use std::path::Path;

use serde::Deserialize;

use scree_core::{Result, ScreeError};

use crate::alphamap::BlendWeights;
use crate::heightmap::Heightmap;
use crate::surface::TerrainSurface;

/// A named texture layer assignable to blend weights
#[derive(Clone, Debug, Deserialize)]
pub struct TerrainLayer {
    pub name: String,
    /// Path to the layer's albedo texture (unused by the painter itself)
    #[serde(default)]
    pub texture: String,
}

/// TOML descriptor for a terrain asset
#[derive(Debug, Deserialize)]
pub struct TerrainDescriptor {
    /// Path to the heightmap PNG, relative to the descriptor file
    pub heightmap: String,
    /// World-space X extent
    pub width: f32,
    /// World-space Z extent
    pub depth: f32,
    /// Maximum Y height (heightmap 1.0 maps to this)
    pub height_scale: f32,
    /// Blend map width in cells
    pub alphamap_width: u32,
    /// Blend map height in cells
    pub alphamap_height: u32,
    /// Texture layers, in layer-index order
    pub layers: Vec<TerrainLayer>,
}

/// A terrain asset the painter can read steepness from and write blend
/// weights back into.
pub struct TerrainAsset {
    heightmap: Heightmap,
    width: f32,
    depth: f32,
    height_scale: f32,
    layers: Vec<TerrainLayer>,
    alphamap_width: u32,
    alphamap_height: u32,
    alphamaps: BlendWeights,
}

impl TerrainAsset {
    /// Load a terrain asset from a TOML descriptor file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let descriptor: TerrainDescriptor = toml::from_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let heightmap = Heightmap::from_png(&base.join(&descriptor.heightmap))?;

        Self::from_parts(heightmap, descriptor)
    }

    /// Build a terrain asset from an already-loaded heightmap and descriptor.
    pub fn from_parts(heightmap: Heightmap, descriptor: TerrainDescriptor) -> Result<Self> {
        if descriptor.layers.is_empty() {
            return Err(ScreeError::TerrainError(
                "terrain descriptor defines no layers".to_string(),
            ));
        }
        if descriptor.alphamap_width == 0 || descriptor.alphamap_height == 0 {
            return Err(ScreeError::TerrainError(format!(
                "alphamap resolution {}x{} has a zero dimension",
                descriptor.alphamap_width, descriptor.alphamap_height
            )));
        }

        let layer_count = descriptor.layers.len() as u32;
        let alphamaps = BlendWeights::new(
            descriptor.alphamap_width,
            descriptor.alphamap_height,
            layer_count,
        );

        Ok(Self {
            heightmap,
            width: descriptor.width,
            depth: descriptor.depth,
            height_scale: descriptor.height_scale,
            layers: descriptor.layers,
            alphamap_width: descriptor.alphamap_width,
            alphamap_height: descriptor.alphamap_height,
            alphamaps,
        })
    }

    /// The committed blend weights.
    pub fn alphamaps(&self) -> &BlendWeights {
        &self.alphamaps
    }

    /// The texture layers.
    pub fn layers(&self) -> &[TerrainLayer] {
        &self.layers
    }
}

impl TerrainSurface for TerrainAsset {
    fn steepness(&self, u: f32, v: f32) -> f32 {
        self.heightmap
            .steepness(u, v, self.width, self.depth, self.height_scale)
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.depth)
    }

    fn alphamap_width(&self) -> u32 {
        self.alphamap_width
    }

    fn alphamap_height(&self) -> u32 {
        self.alphamap_height
    }

    fn alphamap_layers(&self) -> u32 {
        self.layers.len() as u32
    }

    fn layer_names(&self) -> Vec<String> {
        self.layers.iter().map(|l| l.name.clone()).collect()
    }

    fn set_blend_weights(
        &mut self,
        origin_row: u32,
        origin_col: u32,
        weights: &BlendWeights,
    ) -> Result<()> {
        if weights.layers != self.alphamaps.layers
            || origin_row + weights.height > self.alphamap_height
            || origin_col + weights.width > self.alphamap_width
        {
            return Err(ScreeError::RegionOutOfBounds {
                origin_row,
                origin_col,
            });
        }

        for row in 0..weights.height {
            for col in 0..weights.width {
                for layer in 0..weights.layers {
                    self.alphamaps.set(
                        origin_row + row,
                        origin_col + col,
                        layer,
                        weights.get(row, col, layer),
                    );
                }
            }
        }

        Ok(())
    }
}
