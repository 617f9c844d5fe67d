//! Message types for the Elm-style architecture
//!
//! Every input the core reacts to is one of these: pointer and window events
//! from the event loop, toggles from the menu and settings surfaces, and the
//! periodic tick that drives timers.

use crate::config::ConfigPatch;
use crate::geometry::Point;
use crate::panel::PanelSide;

/// Pointer events from the document-wide feed
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    /// Pointer moved inside the window
    Moved(Point),
    /// Pointer left the window entirely
    LeftWindow,
}

/// Per-panel toggles from the menu and the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMsg {
    /// Flip pinned (menu "Pinned" entry)
    TogglePinned(PanelSide),
    /// Flip floating (menu "Floating" entry)
    ToggleFloating(PanelSide),
    /// User grabbed the panel's resize handle
    ResizeStarted(PanelSide),
    /// User released the panel's resize handle
    ResizeEnded(PanelSide),
}

/// Lifecycle and configuration messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Read initial panel state from the host and apply presentation
    Activate,
    /// Cancel every timer and strip presentation
    Deactivate,
    /// Viewport size changed
    Resize { width: f64, height: f64 },
    /// Settings UI changed some fields
    UpdateConfig(ConfigPatch),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Pointer(PointerMsg),
    Panel(PanelMsg),
    App(AppMsg),
    /// Event loop reached a deadline: flush throttled input, fire timers
    Tick,
}

// Convenience constructors for common messages
impl Msg {
    pub fn pointer_moved(x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::Moved(Point::new(x, y)))
    }

    pub fn window_left() -> Self {
        Msg::Pointer(PointerMsg::LeftWindow)
    }

    pub fn resize(width: f64, height: f64) -> Self {
        Msg::App(AppMsg::Resize { width, height })
    }

    pub fn toggle_pinned(side: PanelSide) -> Self {
        Msg::Panel(PanelMsg::TogglePinned(side))
    }

    pub fn toggle_floating(side: PanelSide) -> Self {
        Msg::Panel(PanelMsg::ToggleFloating(side))
    }
}
