//! Command types for the Elm-style architecture
//!
//! Commands represent side effects on the host that should be performed
//! after an update.

use crate::debug_lines::{BoundaryLine, LinesUpdate};
use crate::panel::PanelSide;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Expand a side panel
    Expand(PanelSide),
    /// Collapse a side panel
    Collapse(PanelSide),
    /// Apply or remove the floating presentation
    SetFloatingClass { side: PanelSide, floating: bool },
    /// Draw or move the trigger boundary lines
    ShowBoundaryLines([BoundaryLine; 2]),
    /// Remove the trigger boundary lines
    HideBoundaryLines,
    /// Persist the current configuration
    SaveConfig,
    /// Show a user-visible notice
    Notice(String),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine commands, dropping `None` and unwrapping single entries
    pub fn batch(cmds: Vec<Cmd>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Cmd::None))
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }

    /// Whether this command changes a panel's visibility
    pub fn is_transition(&self) -> bool {
        match self {
            Cmd::Expand(_) | Cmd::Collapse(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_transition),
            _ => false,
        }
    }
}

impl From<LinesUpdate> for Cmd {
    fn from(update: LinesUpdate) -> Self {
        match update {
            LinesUpdate::Show(lines) => Cmd::ShowBoundaryLines(lines),
            LinesUpdate::Hide => Cmd::HideBoundaryLines,
        }
    }
}
