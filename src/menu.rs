//! Context-menu extension for the sidebar toggle buttons
//!
//! When the host opens a menu, it hands over the class lists of the
//! triggering element and its ancestors (nearest first). If that ancestry
//! contains a sidebar toggle button, the host appends the entries returned
//! here and routes their clicks back as messages.

use crate::messages::{Msg, PanelMsg};
use crate::panel::{PanelSide, PanelStates};

/// Class carried by both sidebar toggle buttons
pub const TOGGLE_BUTTON_CLASS: &str = "sidebar-toggle-button";
/// Marker class on the left toggle button
pub const LEFT_MARKER_CLASS: &str = "mod-left";
/// Marker class on the right toggle button
pub const RIGHT_MARKER_CLASS: &str = "mod-right";
/// Menu section the entries are grouped under
pub const MENU_SECTION: &str = "pin";

/// What clicking an injected entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    TogglePinned(PanelSide),
    ToggleFloating(PanelSide),
}

impl MenuAction {
    pub fn into_msg(self) -> Msg {
        match self {
            MenuAction::TogglePinned(side) => Msg::Panel(PanelMsg::TogglePinned(side)),
            MenuAction::ToggleFloating(side) => Msg::Panel(PanelMsg::ToggleFloating(side)),
        }
    }
}

/// A checkbox entry to add to the toggle button's menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub section: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub checked: bool,
    pub action: MenuAction,
}

/// Find which sidebar toggle button (if any) a menu was opened from
///
/// `ancestry` is the class list of the event target followed by each
/// ancestor's. The nearest toggle button wins; one without a side marker is
/// not ours.
pub fn toggle_button_side<A, C>(ancestry: A) -> Option<PanelSide>
where
    A: IntoIterator<Item = C>,
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    for classes in ancestry {
        let classes: Vec<C::Item> = classes.into_iter().collect();
        let has = |name: &str| classes.iter().any(|c| c.as_ref() == name);
        if !has(TOGGLE_BUTTON_CLASS) {
            continue;
        }
        return if has(LEFT_MARKER_CLASS) {
            Some(PanelSide::Left)
        } else if has(RIGHT_MARKER_CLASS) {
            Some(PanelSide::Right)
        } else {
            None
        };
    }
    None
}

/// Entries for a side's toggle button, checked state mirroring the side-table
pub fn sidebar_menu_entries(panels: &PanelStates, side: PanelSide) -> Vec<MenuEntry> {
    let panel = panels.side(side);
    vec![
        MenuEntry {
            section: MENU_SECTION,
            title: "Pinned",
            icon: "pin",
            checked: panel.pinned,
            action: MenuAction::TogglePinned(side),
        },
        MenuEntry {
            section: MENU_SECTION,
            title: "Floating",
            icon: match side {
                PanelSide::Left => "panel-left-open",
                PanelSide::Right => "panel-right-open",
            },
            checked: panel.floating,
            action: MenuAction::ToggleFloating(side),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_parent_toggle_button() {
        let ancestry: [&[&str]; 3] = [
            &["svg-icon", "sidebar-left"],
            &["clickable-icon", "sidebar-toggle-button", "mod-left"],
            &["workspace-ribbon"],
        ];
        assert_eq!(toggle_button_side(ancestry), Some(PanelSide::Left));
    }

    #[test]
    fn test_detects_right_marker() {
        let ancestry = vec![vec!["sidebar-toggle-button".to_string(), "mod-right".to_string()]];
        assert_eq!(toggle_button_side(ancestry), Some(PanelSide::Right));
    }

    #[test]
    fn test_unrelated_menu_gets_nothing() {
        let ancestry: [&[&str]; 2] = [&["nav-file-title"], &["nav-folder"]];
        assert_eq!(toggle_button_side(ancestry), None);
    }

    #[test]
    fn test_unmarked_toggle_button_is_ignored() {
        let ancestry: [&[&str]; 2] = [&["sidebar-toggle-button"], &["mod-left"]];
        assert_eq!(toggle_button_side(ancestry), None);
    }

    #[test]
    fn test_entries_reflect_state() {
        let mut panels = PanelStates::default();
        panels.right.pinned = true;

        let entries = sidebar_menu_entries(&panels, PanelSide::Right);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Pinned");
        assert!(entries[0].checked);
        assert!(!entries[1].checked);
        assert_eq!(entries[1].action, MenuAction::ToggleFloating(PanelSide::Right));
    }
}
