//! Debug tracing infrastructure for development diagnostics
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=arbiter=debug,timer=trace` - scoped filtering
//! - `RUST_LOG=hover_sidebar::update=debug` - module-level filtering
//!
//! Logs are also written to `~/.config/hover-sidebar/logs/hover-sidebar.log`
//! with daily rotation, always at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::HoverModel;
use crate::panel::PanelSide;
use crate::timer::TimerKind;

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::LOG_FILE_PREFIX,
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of panel state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSnapshot {
    pub sides: [SideSnapshot; 2],
    pub window_out_pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideSnapshot {
    pub side: PanelSide,
    pub collapsed: bool,
    pub pinned: bool,
    pub floating: bool,
    pub close_pending: bool,
}

impl PanelSnapshot {
    pub fn from_model(model: &HoverModel) -> Self {
        Self {
            sides: PanelSide::ALL.map(|side| {
                let panel = model.panels.side(side);
                SideSnapshot {
                    side,
                    collapsed: panel.collapsed,
                    pinned: panel.pinned,
                    floating: panel.floating,
                    close_pending: model.timers.is_pending(TimerKind::Close(side)),
                }
            }),
            window_out_pending: model.timers.is_pending(TimerKind::WindowOut),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let flag = |name: &str, side: Option<PanelSide>, before: bool, after: bool| {
            (before != after).then(|| match side {
                Some(side) => format!("{}.{}: {} → {}", side, name, before, after),
                None => format!("{}: {} → {}", name, before, after),
            })
        };

        let mut changes = Vec::new();
        for (before, after) in self.sides.iter().zip(&other.sides) {
            let side = Some(before.side);
            changes.extend(flag("collapsed", side, before.collapsed, after.collapsed));
            changes.extend(flag("pinned", side, before.pinned, after.pinned));
            changes.extend(flag("floating", side, before.floating, after.floating));
            changes.extend(flag("close", side, before.close_pending, after.close_pending));
        }
        changes.extend(flag(
            "window_out",
            None,
            self.window_out_pending,
            other.window_out_pending,
        ));

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
