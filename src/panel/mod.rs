//! Side panel state
//!
//! ## Architecture
//!
//! - `PanelSide`: Left or Right
//! - `PanelState`: collapsed / pinned / floating / resizing for one side
//! - `PanelStates`: the side-table holding both
//!
//! `collapsed` is written by the arbiter when it expands or collapses a panel
//! and refreshed from the host before every evaluation, since the user can
//! toggle a panel directly.

mod state;

pub use state::{PanelSide, PanelState, PanelStates, Visibility};
