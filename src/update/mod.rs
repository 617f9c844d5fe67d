//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Together they
//! form the visibility arbiter: they read the host through [`PanelHost`]
//! queries only and return the effects to apply as a [`Cmd`].

mod app;
mod panel;
mod pointer;
mod tick;

use std::time::Instant;

use crate::commands::Cmd;
use crate::host::PanelHost;
use crate::messages::Msg;
use crate::model::HoverModel;

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use panel::update_panel;
pub use pointer::{evaluate_pointer, update_pointer};
pub use tick::update_tick;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(
    model: &mut HoverModel,
    host: &dyn PanelHost,
    msg: Msg,
    now: Instant,
) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, host, msg, now)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, host, msg, now)
    }
}

/// Inner update logic (no tracing)
fn update_inner(
    model: &mut HoverModel,
    host: &dyn PanelHost,
    msg: Msg,
    now: Instant,
) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, host, m, now),
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::App(m) => app::update_app(model, host, m),
        Msg::Tick => tick::update_tick(model, host, now),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel state and logs diffs. Pointer moves and ticks
/// are too frequent to log unless they change something.
#[cfg(debug_assertions)]
fn update_traced(
    model: &mut HoverModel,
    host: &dyn PanelHost,
    msg: Msg,
    now: Instant,
) -> Option<Cmd> {
    let is_noisy = matches!(
        &msg,
        Msg::Tick | Msg::Pointer(crate::messages::PointerMsg::Moved(_))
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before = PanelSnapshot::from_model(model);
    let result = update_inner(model, host, msg, now);
    let after = PanelSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", msg = %msg_name, %diff, "state changed");
    }
    if is_noisy && result.as_ref().is_some_and(Cmd::is_transition) {
        debug!(target: "message", msg = %msg_name, "produced transition");
    }

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
        Msg::Tick => "Tick".to_string(),
    }
}
