//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use hover_sidebar::config::ConfigLoad;
use hover_sidebar::debug_lines::BoundaryLine;
use hover_sidebar::geometry::{Rect, Viewport};
use hover_sidebar::{HoverConfig, HoverSidebar, PanelHost, PanelSide};

pub const WINDOW_WIDTH: f64 = 1000.0;
pub const WINDOW_HEIGHT: f64 = 600.0;
pub const PANEL_WIDTH: f64 = 250.0;

/// Everything the core asked the host to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Expand(PanelSide),
    Collapse(PanelSide),
    Floating(PanelSide, bool),
    ShowLines([BoundaryLine; 2]),
    HideLines,
    Notice(String),
}

#[derive(Debug, Clone)]
pub struct FakePanel {
    pub present: bool,
    pub collapsed: bool,
    pub pinned: bool,
    pub focused: bool,
}

impl Default for FakePanel {
    fn default() -> Self {
        Self {
            present: true,
            collapsed: true,
            pinned: false,
            focused: false,
        }
    }
}

/// In-memory workspace that records every call
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    pub left: FakePanel,
    pub right: FakePanel,
    pub overlay_open: bool,
    pub calls: Vec<HostCall>,
}

impl FakeHost {
    pub fn panel(&self, side: PanelSide) -> &FakePanel {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
        }
    }

    pub fn panel_mut(&mut self, side: PanelSide) -> &mut FakePanel {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
        }
    }

    pub fn expands(&self, side: PanelSide) -> usize {
        self.count(&HostCall::Expand(side))
    }

    pub fn collapses(&self, side: PanelSide) -> usize {
        self.count(&HostCall::Collapse(side))
    }

    pub fn transitions(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HostCall::Expand(_) | HostCall::Collapse(_)))
            .count()
    }

    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl PanelHost for FakeHost {
    fn has_panel(&self, side: PanelSide) -> bool {
        self.panel(side).present
    }

    fn expand(&mut self, side: PanelSide) {
        self.panel_mut(side).collapsed = false;
        self.calls.push(HostCall::Expand(side));
    }

    fn collapse(&mut self, side: PanelSide) {
        self.panel_mut(side).collapsed = true;
        self.calls.push(HostCall::Collapse(side));
    }

    fn set_floating_class(&mut self, side: PanelSide, floating: bool) {
        self.calls.push(HostCall::Floating(side, floating));
    }

    fn is_collapsed(&self, side: PanelSide) -> bool {
        self.panel(side).collapsed
    }

    fn panel_bounds(&self, side: PanelSide) -> Option<Rect> {
        if self.panel(side).collapsed {
            return None;
        }
        Some(match side {
            PanelSide::Left => Rect::new(0.0, 0.0, PANEL_WIDTH, WINDOW_HEIGHT),
            PanelSide::Right => Rect::new(
                WINDOW_WIDTH - PANEL_WIDTH,
                0.0,
                PANEL_WIDTH,
                WINDOW_HEIGHT,
            ),
        })
    }

    fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    fn is_pinned(&self, side: PanelSide) -> bool {
        self.panel(side).pinned
    }

    fn is_focus_within(&self, side: PanelSide) -> bool {
        self.panel(side).focused
    }

    fn show_boundary_lines(&mut self, lines: &[BoundaryLine; 2]) {
        self.calls.push(HostCall::ShowLines(*lines));
    }

    fn hide_boundary_lines(&mut self) {
        self.calls.push(HostCall::HideLines);
    }

    fn notice(&mut self, message: &str) {
        self.calls.push(HostCall::Notice(message.to_string()));
    }
}

/// Config with throttling and boundary lines off, so call logs stay minimal
pub fn test_config() -> HoverConfig {
    HoverConfig {
        pointer_throttle_ms: 0,
        show_debug_lines: false,
        ..HoverConfig::default()
    }
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Activate against `host` and clear the activation calls
pub fn activate_with(
    host: FakeHost,
    config: HoverConfig,
) -> (HoverSidebar<FakeHost>, Instant) {
    let t0 = Instant::now();
    let load = ConfigLoad {
        config,
        notice: None,
    };
    let mut sidebar = HoverSidebar::activate(
        host,
        load,
        Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        t0,
    );
    sidebar.host_mut().calls.clear();
    (sidebar, t0)
}

/// Both panels present and collapsed, throttling off
pub fn activated() -> (HoverSidebar<FakeHost>, Instant) {
    activate_with(FakeHost::default(), test_config())
}

/// Both panels present and expanded, throttling off
pub fn activated_expanded() -> (HoverSidebar<FakeHost>, Instant) {
    let mut host = FakeHost::default();
    host.left.collapsed = false;
    host.right.collapsed = false;
    activate_with(host, test_config())
}
