//! Host workspace adapter
//!
//! The host owns the real panel handles. The core only reaches them through
//! this trait: read-only queries during evaluation, and the mutating calls
//! the runtime issues when it executes a [`Cmd`](crate::commands::Cmd).

use crate::debug_lines::BoundaryLine;
use crate::geometry::Rect;
use crate::panel::PanelSide;

/// Operations the core calls on the host workspace
///
/// Expand and collapse must be idempotent at the boundary: collapsing an
/// already-collapsed panel is a no-op, not an error.
pub trait PanelHost {
    /// Whether the host exposes a panel for `side`
    fn has_panel(&self, side: PanelSide) -> bool;

    /// Expand a side panel
    fn expand(&mut self, side: PanelSide);

    /// Collapse a side panel
    fn collapse(&mut self, side: PanelSide);

    /// Apply or remove the floating presentation
    fn set_floating_class(&mut self, side: PanelSide, floating: bool);

    /// Current collapsed state as the host sees it
    fn is_collapsed(&self, side: PanelSide) -> bool;

    /// On-screen bounds of the panel container, `None` while hidden
    fn panel_bounds(&self, side: PanelSide) -> Option<Rect>;

    /// A menu or modal is currently open
    ///
    /// Re-checked on every event: overlays open and close outside the core.
    fn is_overlay_open(&self) -> bool;

    /// Initial pinned state restored by the host, read once at activation
    fn is_pinned(&self, _side: PanelSide) -> bool {
        false
    }

    /// Keyboard focus is inside the panel container
    fn is_focus_within(&self, _side: PanelSide) -> bool {
        false
    }

    /// Show or reposition the boundary lines
    fn show_boundary_lines(&mut self, _lines: &[BoundaryLine; 2]) {}

    /// Remove the boundary lines
    fn hide_boundary_lines(&mut self) {}

    /// Show a transient user-visible notice
    fn notice(&mut self, message: &str) {
        tracing::warn!(target: "notice", "{}", message);
    }
}
