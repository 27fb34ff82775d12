//! Scree Viewer - egui surface for the slope painter
//!
//! Hosts embed `slope_paint_panel` in their own window or dock and hand the
//! returned actions to a `PaintSession`. Window management, menus, and
//! selection tracking stay with the host editor.

pub mod panels;
pub mod session;

pub use panels::{slope_paint_panel, SlopePaintPanel, SlopePanelAction};
pub use session::PaintSession;
