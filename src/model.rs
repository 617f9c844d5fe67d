//! Application model
//!
//! Everything the arbiter decides from: configuration, the panel side-table,
//! pending timers, the pointer throttle and the viewport size.

use std::time::Instant;

use crate::config::HoverConfig;
use crate::debug_lines::DebugLines;
use crate::geometry::{Point, Viewport};
use crate::host::PanelHost;
use crate::panel::{PanelSide, PanelStates};
use crate::throttle::Throttle;
use crate::timer::TimerCoordinator;

#[derive(Debug, Clone)]
pub struct HoverModel {
    pub config: HoverConfig,
    pub panels: PanelStates,
    pub timers: TimerCoordinator,
    pub throttle: Throttle<Point>,
    pub viewport: Viewport,
    pub debug_lines: DebugLines,
    /// Set by `Activate`, cleared by `Deactivate`; events are ignored while false
    pub active: bool,
}

impl HoverModel {
    pub fn new(config: HoverConfig, viewport: Viewport) -> Self {
        let throttle = Throttle::new(config.pointer_throttle_ms);
        Self {
            config,
            panels: PanelStates::default(),
            timers: TimerCoordinator::new(),
            throttle,
            viewport,
            debug_lines: DebugLines::default(),
            active: false,
        }
    }

    /// Refresh `collapsed` from the host for a side
    ///
    /// The user can expand or collapse a panel directly; the host is the
    /// source of truth for visibility.
    pub fn observe_collapsed(&mut self, host: &dyn PanelHost, side: PanelSide) {
        let panel = self.panels.side_mut(side);
        if panel.available {
            panel.collapsed = host.is_collapsed(side);
        }
    }

    /// Floating class value for a side: only enabled sides float
    pub fn floating_class(&self, side: PanelSide) -> bool {
        self.config.side(side).enabled && self.panels.side(side).floating
    }

    /// Earliest instant at which `Tick` has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.timers.next_deadline(), self.throttle.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }
}

impl Default for HoverModel {
    fn default() -> Self {
        Self::new(HoverConfig::default(), Viewport::default())
    }
}
