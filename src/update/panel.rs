//! Panel toggle handlers
//!
//! Pin and floating toggles come from the injected menu entries; resize
//! start/end come from the host's drag handling.

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::HoverModel;
use crate::panel::PanelSide;

/// Update function for panel messages
pub fn update_panel(model: &mut HoverModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::TogglePinned(side) => {
            if !model.panels.side(side).available {
                tracing::warn!(%side, "cannot pin missing sidebar");
                return None;
            }
            let pinned = model.panels.side_mut(side).toggle_pinned();
            tracing::debug!(target: "arbiter", %side, pinned, "pin toggled");

            // Pinning does not move the panel, but nothing queued may move it either
            if pinned {
                model.timers.cancel_close(side);
                if model.panels.all_pinned() {
                    model.timers.cancel_window_out();
                }
            }
            None
        }

        PanelMsg::ToggleFloating(side) => {
            let floating = model.panels.side_mut(side).toggle_floating();
            match side {
                PanelSide::Left => model.config.left_floating = floating,
                PanelSide::Right => model.config.right_floating = floating,
            }
            tracing::debug!(%side, floating, "floating toggled");

            let mut cmds = vec![Cmd::SaveConfig];
            if model.panels.side(side).available {
                cmds.insert(
                    0,
                    Cmd::SetFloatingClass {
                        side,
                        floating: model.floating_class(side),
                    },
                );
            }
            Cmd::batch(cmds)
        }

        PanelMsg::ResizeStarted(side) => {
            model.panels.side_mut(side).resizing = true;
            model.timers.cancel_close(side);
            None
        }

        PanelMsg::ResizeEnded(side) => {
            model.panels.side_mut(side).resizing = false;
            None
        }
    }
}
