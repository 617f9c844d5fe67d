//! Lifecycle, viewport and configuration handlers

use crate::commands::Cmd;
use crate::config::{HoverConfig, INVALID_SETTINGS_NOTICE};
use crate::host::PanelHost;
use crate::messages::AppMsg;
use crate::model::HoverModel;
use crate::panel::PanelSide;

/// Update function for app messages
pub fn update_app(model: &mut HoverModel, host: &dyn PanelHost, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Activate => activate(model, host),
        AppMsg::Deactivate => deactivate(model),

        AppMsg::Resize { width, height } => {
            if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
                tracing::trace!(width, height, "ignoring malformed resize");
                return None;
            }
            model.viewport.width = width;
            model.viewport.height = height;
            None
        }

        AppMsg::UpdateConfig(patch) => {
            if patch.is_empty() {
                return None;
            }
            match model.config.patched(&patch) {
                Ok(next) => Cmd::batch(apply_config(model, next)),
                Err(e) => {
                    tracing::error!("Rejected settings update: {}", e);
                    Some(Cmd::Notice(INVALID_SETTINGS_NOTICE.to_string()))
                }
            }
        }
    }
}

fn activate(model: &mut HoverModel, host: &dyn PanelHost) -> Option<Cmd> {
    let mut cmds = Vec::new();

    for side in PanelSide::ALL {
        let available = host.has_panel(side);
        let floating = model.config.side(side).floating;
        let panel = model.panels.side_mut(side);
        panel.available = available;
        panel.floating = floating;
        panel.resizing = false;

        if !available {
            tracing::error!(%side, "Sidebar not found, hover disabled for this side");
            continue;
        }
        panel.collapsed = host.is_collapsed(side);
        panel.pinned = host.is_pinned(side);

        cmds.push(Cmd::SetFloatingClass {
            side,
            floating: model.floating_class(side),
        });
    }

    model.timers.cancel_all();
    model.throttle.reset();
    model
        .throttle
        .set_interval(model.config.pointer_throttle_ms);
    cmds.extend(model.debug_lines.refresh(&model.config).map(Cmd::from));
    model.active = true;

    tracing::info!(
        left = model.panels.left.available,
        right = model.panels.right.available,
        "hover sidebar activated"
    );
    Cmd::batch(cmds)
}

fn deactivate(model: &mut HoverModel) -> Option<Cmd> {
    model.timers.cancel_all();
    model.throttle.reset();
    model.active = false;

    let mut cmds: Vec<Cmd> = PanelSide::ALL
        .into_iter()
        .filter(|side| model.panels.side(*side).available)
        .map(|side| Cmd::SetFloatingClass {
            side,
            floating: false,
        })
        .collect();
    if model.debug_lines.clear() {
        cmds.push(Cmd::HideBoundaryLines);
    }

    tracing::info!("hover sidebar deactivated");
    Cmd::batch(cmds)
}

/// Swap in a validated config and emit the presentation changes it implies
fn apply_config(model: &mut HoverModel, next: HoverConfig) -> Vec<Cmd> {
    let classes_before = PanelSide::ALL.map(|side| model.floating_class(side));
    let previous = std::mem::replace(&mut model.config, next);
    let mut cmds = Vec::new();

    for (side, class_before) in PanelSide::ALL.into_iter().zip(classes_before) {
        let before = previous.side(side);
        let after = model.config.side(side);

        if before.floating != after.floating {
            model.panels.side_mut(side).floating = after.floating;
        }
        if before.enabled && !after.enabled {
            model.timers.cancel_close(side);
        }

        let class_after = model.floating_class(side);
        if model.panels.side(side).available && class_before != class_after {
            cmds.push(Cmd::SetFloatingClass {
                side,
                floating: class_after,
            });
        }
    }

    if !model.config.window_out_enabled {
        model.timers.cancel_window_out();
    }
    model
        .throttle
        .set_interval(model.config.pointer_throttle_ms);
    cmds.extend(model.debug_lines.refresh(&model.config).map(Cmd::from));
    cmds.push(Cmd::SaveConfig);
    cmds
}
