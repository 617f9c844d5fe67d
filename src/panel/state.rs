//! Per-side panel state
//!
//! The core keeps its own side-table of panel state instead of bolting fields
//! onto the host's panel objects. `collapsed` mirrors what the host reports;
//! `pinned`, `floating` and `resizing` are owned here.

use serde::{Deserialize, Serialize};

/// Which of the two side panels a piece of state or config applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSide {
    Left,
    Right,
}

impl PanelSide {
    /// Both sides, in evaluation order
    pub const ALL: [PanelSide; 2] = [PanelSide::Left, PanelSide::Right];

    /// Lowercase name, used in logs and menu markers
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelSide::Left => "left",
            PanelSide::Right => "right",
        }
    }
}

impl std::fmt::Display for PanelSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of a side panel as seen by the arbiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Expanded,
    Collapsed,
}

/// State for a single side panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    /// Which side this panel docks to
    pub side: PanelSide,

    /// Current visibility (true = hidden/narrow)
    pub collapsed: bool,

    /// Exempt from every automatic expand/collapse
    pub pinned: bool,

    /// Overlays content instead of displacing it (presentation only)
    pub floating: bool,

    /// The user is dragging the panel's resize handle
    pub resizing: bool,

    /// The host exposed a panel handle for this side at activation
    pub available: bool,
}

impl PanelState {
    /// Create state for a side, starting collapsed and unpinned
    pub fn new(side: PanelSide) -> Self {
        Self {
            side,
            collapsed: true,
            pinned: false,
            floating: false,
            resizing: false,
            available: true,
        }
    }

    pub fn visibility(&self) -> Visibility {
        if self.collapsed {
            Visibility::Collapsed
        } else {
            Visibility::Expanded
        }
    }

    /// Whether the arbiter may move this panel on its own
    ///
    /// `pinned` makes the side inert regardless of visibility, and a side
    /// with no host panel is never touched.
    pub fn is_automatic(&self) -> bool {
        self.available && !self.pinned
    }

    /// Flip the pinned flag, returning the new value
    pub fn toggle_pinned(&mut self) -> bool {
        self.pinned = !self.pinned;
        self.pinned
    }

    /// Flip the floating flag, returning the new value
    pub fn toggle_floating(&mut self) -> bool {
        self.floating = !self.floating;
        self.floating
    }
}

/// Side-table for both panels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelStates {
    pub left: PanelState,
    pub right: PanelState,
}

impl Default for PanelStates {
    fn default() -> Self {
        Self {
            left: PanelState::new(PanelSide::Left),
            right: PanelState::new(PanelSide::Right),
        }
    }
}

impl PanelStates {
    /// Get panel state by side
    pub fn side(&self, side: PanelSide) -> &PanelState {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
        }
    }

    /// Get mutable panel state by side
    pub fn side_mut(&mut self, side: PanelSide) -> &mut PanelState {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
        }
    }

    /// Iterate both panels in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &PanelState> {
        [&self.left, &self.right].into_iter()
    }

    /// True when every available panel is pinned
    pub fn all_pinned(&self) -> bool {
        self.iter().filter(|p| p.available).all(|p| p.pinned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_names() {
        assert_eq!(PanelSide::Left.to_string(), "left");
        assert_eq!(PanelSide::ALL, [PanelSide::Left, PanelSide::Right]);
    }

    #[test]
    fn test_new_panel_is_collapsed_and_automatic() {
        let panel = PanelState::new(PanelSide::Left);
        assert!(panel.collapsed);
        assert_eq!(panel.visibility(), Visibility::Collapsed);
        assert!(panel.is_automatic());
    }

    #[test]
    fn test_pinned_is_independent_of_collapsed() {
        let mut panel = PanelState::new(PanelSide::Right);
        panel.collapsed = false;
        assert!(panel.toggle_pinned());
        assert!(!panel.collapsed);
        assert!(!panel.is_automatic());

        panel.collapsed = true;
        assert!(panel.pinned);
        assert!(!panel.toggle_pinned());
        assert!(panel.collapsed);
    }

    #[test]
    fn test_unavailable_panel_is_inert() {
        let mut panel = PanelState::new(PanelSide::Left);
        panel.available = false;
        assert!(!panel.is_automatic());
    }

    #[test]
    fn test_all_pinned_ignores_unavailable() {
        let mut panels = PanelStates::default();
        assert!(!panels.all_pinned());

        panels.left.pinned = true;
        assert!(!panels.all_pinned());

        panels.right.available = false;
        assert!(panels.all_pinned());
    }

    #[test]
    fn test_side_lookup() {
        let mut panels = PanelStates::default();
        panels.side_mut(PanelSide::Right).floating = true;
        assert!(panels.side(PanelSide::Right).floating);
        assert!(!panels.side(PanelSide::Left).floating);
    }
}
