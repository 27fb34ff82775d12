//! Scree Terrain - Terrain data access for the slope painter
//!
//! Provides heightmap loading and steepness sampling, the `TerrainSurface`
//! trait the painter operates on, blend weight (alphamap) storage, and a
//! TOML-described `TerrainAsset` implementing the trait. Does not depend on
//! scree-resample or scree-paint — it only exposes data.

pub mod alphamap;
pub mod asset;
pub mod heightmap;
pub mod surface;

pub use alphamap::BlendWeights;
pub use asset::{TerrainAsset, TerrainDescriptor, TerrainLayer};
pub use heightmap::Heightmap;
pub use surface::TerrainSurface;
