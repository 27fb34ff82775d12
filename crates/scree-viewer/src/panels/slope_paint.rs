//! egui panel for slope-based blend map painting.

use scree_paint::PaintConfig;

/// Actions returned by the panel that the app must handle.
#[derive(Debug, PartialEq, Eq)]
pub enum SlopePanelAction {
    Preview,
    RequestPaint,
    ConfirmPaint,
    CancelPaint,
}

/// Panel state carried between frames.
pub struct SlopePaintPanel {
    pub config: PaintConfig,
    /// Whether the destructive-paint confirmation dialog is showing
    pub confirm_open: bool,
    /// Last rendered steepness preview, if any
    pub preview: Option<egui::TextureHandle>,
}

impl Default for SlopePaintPanel {
    fn default() -> Self {
        Self {
            config: PaintConfig::default(),
            confirm_open: false,
            preview: None,
        }
    }
}

/// Draw the slope paint panel. Returns a list of actions to process.
///
/// `layer_names` is `None` when no terrain is selected; the controls are
/// suppressed and only an informational label is shown.
pub fn slope_paint_panel(
    ui: &mut egui::Ui,
    panel: &mut SlopePaintPanel,
    layer_names: Option<&[String]>,
) -> Vec<SlopePanelAction> {
    let mut actions = Vec::new();

    ui.heading("Texture by Steepness");
    ui.separator();

    let Some(names) = layer_names else {
        ui.label("Select a terrain to paint.");
        return actions;
    };
    if names.is_empty() {
        ui.label("The selected terrain has no texture layers.");
        return actions;
    }

    // Selections may be stale from a previously selected terrain
    panel.config.slope_layer = panel.config.slope_layer.min(names.len() - 1);
    panel.config.flat_layer = panel.config.flat_layer.min(names.len() - 1);

    egui::ComboBox::from_label("Slope Layer")
        .selected_text(&names[panel.config.slope_layer])
        .show_ui(ui, |ui| {
            for (i, name) in names.iter().enumerate() {
                ui.selectable_value(&mut panel.config.slope_layer, i, name);
            }
        });

    egui::ComboBox::from_label("Flats Layer")
        .selected_text(&names[panel.config.flat_layer])
        .show_ui(ui, |ui| {
            for (i, name) in names.iter().enumerate() {
                ui.selectable_value(&mut panel.config.flat_layer, i, name);
            }
        });

    ui.add(
        egui::Slider::new(&mut panel.config.threshold_degrees, 0.0..=90.0)
            .suffix("\u{00b0}")
            .text("Slope"),
    );

    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Preview Steepness").clicked() {
            actions.push(SlopePanelAction::Preview);
        }
        if ui.button("Paint").clicked() {
            panel.confirm_open = true;
            actions.push(SlopePanelAction::RequestPaint);
        }
    });

    if let Some(preview) = &panel.preview {
        ui.add(egui::Image::new(preview).fit_to_exact_size(egui::vec2(100.0, 100.0)));
    }

    ui.label("As the slope threshold increases the slope layer covers more area.");

    if panel.confirm_open {
        let mut open = true;
        egui::Window::new("Warning")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ui.ctx(), |ui| {
                ui.label("Painting will overwrite any blend data already on the terrain.");
                ui.horizontal(|ui| {
                    if ui.button("Sounds good").clicked() {
                        panel.confirm_open = false;
                        actions.push(SlopePanelAction::ConfirmPaint);
                    }
                    if ui.button("Cancel").clicked() {
                        panel.confirm_open = false;
                        actions.push(SlopePanelAction::CancelPaint);
                    }
                });
            });
        if !open {
            panel.confirm_open = false;
            actions.push(SlopePanelAction::CancelPaint);
        }
    }

    actions
}
