//! Pointer handlers: zone entry, panel hover and window leave

use std::time::Instant;

use crate::commands::Cmd;
use crate::geometry::{is_in_zone, is_within_panel, Point};
use crate::host::PanelHost;
use crate::messages::PointerMsg;
use crate::model::HoverModel;
use crate::panel::{PanelSide, Visibility};
use crate::timer::TimerKind;

/// Update function for pointer messages
pub fn update_pointer(
    model: &mut HoverModel,
    host: &dyn PanelHost,
    msg: PointerMsg,
    now: Instant,
) -> Option<Cmd> {
    if !model.active {
        return None;
    }

    match msg {
        PointerMsg::Moved(point) => {
            if !point.is_finite() {
                tracing::trace!(target: "pointer", ?point, "dropping malformed pointer event");
                return None;
            }
            let point = model.throttle.offer(point, now)?;
            evaluate_pointer(model, host, point, now)
        }

        PointerMsg::LeftWindow => {
            // A held sample would read as re-entry and cancel the timer below
            model.throttle.reset();

            if !model.config.window_out_enabled || host.is_overlay_open() {
                return None;
            }
            model
                .timers
                .schedule_window_out(model.config.window_out_delay, now);
            None
        }
    }
}

/// Run the transition rules for one released pointer sample
pub fn evaluate_pointer(
    model: &mut HoverModel,
    host: &dyn PanelHost,
    point: Point,
    now: Instant,
) -> Option<Cmd> {
    if host.is_overlay_open() {
        return None;
    }
    if PanelSide::ALL
        .into_iter()
        .any(|side| model.panels.side(side).available && host.is_focus_within(side))
    {
        return None;
    }

    // Any qualifying move means the pointer is back inside the window
    model.timers.cancel_window_out();

    let cmds = PanelSide::ALL
        .into_iter()
        .filter_map(|side| evaluate_side(model, host, side, point, now))
        .collect();
    Cmd::batch(cmds)
}

fn evaluate_side(
    model: &mut HoverModel,
    host: &dyn PanelHost,
    side: PanelSide,
    point: Point,
    now: Instant,
) -> Option<Cmd> {
    if !model.panels.side(side).available {
        return None;
    }
    model.observe_collapsed(host, side);

    // Never auto-close a panel while it is hovered
    if is_within_panel(point, host.panel_bounds(side)) {
        model.timers.cancel_close(side);
        return None;
    }

    let side_config = model.config.side(side);
    let panel = model.panels.side(side);
    if !side_config.enabled || panel.pinned || panel.resizing {
        return None;
    }

    let in_zone = is_in_zone(
        side,
        point.x,
        model.viewport.width,
        side_config.trigger_distance,
    );

    match (panel.visibility(), in_zone) {
        (Visibility::Collapsed, true) => {
            model.timers.cancel_close(side);
            model.panels.side_mut(side).collapsed = false;
            tracing::debug!(target: "arbiter", %side, x = point.x, "pointer entered zone, expanding");
            Some(Cmd::Expand(side))
        }
        (Visibility::Collapsed, false) => {
            // Collapsed by other means; a stale close has nothing to do
            model.timers.cancel_close(side);
            None
        }
        (Visibility::Expanded, true) => {
            model.timers.cancel_close(side);
            None
        }
        (Visibility::Expanded, false) => {
            // Keep the original deadline while the pointer wanders outside
            if !model.timers.is_pending(TimerKind::Close(side)) {
                model
                    .timers
                    .schedule_close(side, side_config.close_delay_ms, now);
            }
            None
        }
    }
}
