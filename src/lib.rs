//! Hover Sidebar - hover-triggered, auto-collapsing side panels
//!
//! This crate provides the state machine that expands a workspace's left and
//! right panels when the pointer reaches a screen edge and collapses them
//! again once it moves away, implementing the Elm Architecture pattern:
//! messages in, pure updates over a model, commands out to the host.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod debug_lines;
pub mod geometry;
pub mod host;
pub mod menu;
pub mod messages;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod throttle;
pub mod timer;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::HoverConfig;
pub use host::PanelHost;
pub use messages::Msg;
pub use model::HoverModel;
pub use panel::PanelSide;
pub use runtime::HoverSidebar;
