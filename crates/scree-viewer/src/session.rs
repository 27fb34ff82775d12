//! Wires panel actions to the paint pipeline.

use anyhow::{Context, Result};

use scree_paint::{paint, preview_image};
use scree_resample::{FilterMode, Resampler};
use scree_terrain::TerrainSurface;

use crate::panels::{SlopePaintPanel, SlopePanelAction};

/// Resampler choice and filter for one editing session.
///
/// Hosts construct this once (typically with a `GpuResampler`, falling
/// back to `CpuResampler` when no adapter is available) and feed it the
/// actions the panel returns each frame.
pub struct PaintSession<R: Resampler> {
    pub resampler: R,
    pub filter: FilterMode,
}

impl<R: Resampler> PaintSession<R> {
    pub fn new(resampler: R, filter: FilterMode) -> Self {
        Self { resampler, filter }
    }

    /// Process the actions returned by `slope_paint_panel` for this frame.
    pub fn handle_actions<S: TerrainSurface + ?Sized>(
        &self,
        ctx: &egui::Context,
        panel: &mut SlopePaintPanel,
        terrain: &mut S,
        actions: Vec<SlopePanelAction>,
    ) -> Result<()> {
        for action in actions {
            match action {
                SlopePanelAction::Preview => {
                    let img = preview_image(terrain, &self.resampler, self.filter)
                        .context("steepness preview failed")?;
                    let (width, height) = img.dimensions();

                    let color_image = egui::ColorImage::from_gray(
                        [width as usize, height as usize],
                        img.as_raw(),
                    );
                    panel.preview = Some(ctx.load_texture(
                        "steepness-preview",
                        color_image,
                        egui::TextureOptions::NEAREST,
                    ));
                }
                SlopePanelAction::ConfirmPaint => {
                    paint(terrain, &self.resampler, &panel.config, self.filter)
                        .context("blend map paint failed")?;
                    println!(
                        "Painted {}x{} blend map (flat layer {}, slope layer {}, {:.0} degrees)",
                        terrain.alphamap_width(),
                        terrain.alphamap_height(),
                        panel.config.flat_layer,
                        panel.config.slope_layer,
                        panel.config.threshold_degrees
                    );
                }
                // The panel opens its own confirmation dialog on request
                SlopePanelAction::RequestPaint | SlopePanelAction::CancelPaint => {}
            }
        }

        Ok(())
    }
}
