//! GUI panels for the painter

pub mod slope_paint;

pub use slope_paint::{slope_paint_panel, SlopePaintPanel, SlopePanelAction};
