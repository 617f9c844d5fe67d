//! Tick handler: releases throttled input, then fires due timers

use std::time::Instant;

use crate::commands::Cmd;
use crate::host::PanelHost;
use crate::model::HoverModel;
use crate::panel::PanelSide;
use crate::timer::TimerKind;

use super::pointer::evaluate_pointer;

/// Update function for `Msg::Tick`
///
/// The pointer sample is evaluated before timers: the move it carries
/// happened before this tick, so a cancel it causes wins over a fire.
pub fn update_tick(model: &mut HoverModel, host: &dyn PanelHost, now: Instant) -> Option<Cmd> {
    if !model.active {
        return None;
    }

    let mut cmds = Vec::new();

    if let Some(point) = model.throttle.poll(now) {
        cmds.extend(evaluate_pointer(model, host, point, now));
    }

    for kind in model.timers.take_due(now) {
        let cmd = match kind {
            TimerKind::Close(side) => close_fired(model, host, side),
            TimerKind::WindowOut => Cmd::batch(window_out_fired(model, host)),
        };
        cmds.extend(cmd);
    }

    Cmd::batch(cmds)
}

fn close_fired(model: &mut HoverModel, host: &dyn PanelHost, side: PanelSide) -> Option<Cmd> {
    model.observe_collapsed(host, side);
    let panel = model.panels.side(side);
    if !panel.is_automatic() || panel.resizing || panel.collapsed {
        return None;
    }
    if !model.config.side(side).enabled {
        return None;
    }
    if host.is_overlay_open() {
        tracing::debug!(target: "arbiter", %side, "overlay open, dropping close");
        return None;
    }

    model.panels.side_mut(side).collapsed = true;
    tracing::debug!(target: "arbiter", %side, "close delay elapsed, collapsing");
    Some(Cmd::Collapse(side))
}

fn window_out_fired(model: &mut HoverModel, host: &dyn PanelHost) -> Vec<Cmd> {
    let mut cmds = Vec::new();
    for side in PanelSide::ALL {
        model.observe_collapsed(host, side);
        let panel = model.panels.side(side);
        if !panel.is_automatic() || panel.resizing || !model.config.side(side).enabled {
            continue;
        }
        model.timers.cancel_close(side);
        if panel.collapsed {
            continue;
        }
        model.panels.side_mut(side).collapsed = true;
        tracing::debug!(target: "arbiter", %side, "pointer stayed out of window, collapsing");
        cmds.push(Cmd::Collapse(side));
    }
    cmds
}
