//! Trigger boundary lines
//!
//! Two thin vertical lines marking where each edge zone ends. The core only
//! tracks what is currently shown; drawing is the host's job.

use crate::config::{Color, HoverConfig};
use crate::panel::PanelSide;

/// One boundary line, offset from its own window edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryLine {
    pub side: PanelSide,
    /// Distance from the side's window edge in logical pixels
    pub offset: f64,
    pub color: Color,
}

impl BoundaryLine {
    /// Absolute x position for a viewport of the given width
    pub fn x(&self, viewport_width: f64) -> f64 {
        match self.side {
            PanelSide::Left => self.offset,
            PanelSide::Right => viewport_width - self.offset,
        }
    }
}

/// What the boundary lines should look like for `config`
pub fn boundary_lines(config: &HoverConfig) -> Option<[BoundaryLine; 2]> {
    if !config.show_debug_lines {
        return None;
    }
    Some(PanelSide::ALL.map(|side| {
        let side_config = config.side(side);
        BoundaryLine {
            side,
            offset: side_config.trigger_distance,
            color: side_config.debug_line_color,
        }
    }))
}

/// Change needed to bring the host's lines up to date
#[derive(Debug, Clone, PartialEq)]
pub enum LinesUpdate {
    Show([BoundaryLine; 2]),
    Hide,
}

/// Lines currently shown by the host
///
/// Created lazily on first show; repositioned only when offsets or colours
/// actually change.
#[derive(Debug, Clone, Default)]
pub struct DebugLines {
    shown: Option<[BoundaryLine; 2]>,
}

impl DebugLines {
    /// Diff against `config`, returning the update to push (if any)
    pub fn refresh(&mut self, config: &HoverConfig) -> Option<LinesUpdate> {
        let desired = boundary_lines(config);
        if desired == self.shown {
            return None;
        }
        self.shown = desired;
        Some(match desired {
            Some(lines) => LinesUpdate::Show(lines),
            None => LinesUpdate::Hide,
        })
    }

    /// Forget shown lines, returning whether the host must remove them
    pub fn clear(&mut self) -> bool {
        self.shown.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_follow_trigger_distance() {
        let config = HoverConfig {
            left_trigger_distance: 30.0,
            right_trigger_distance: 12.0,
            ..HoverConfig::default()
        };
        let [left, right] = boundary_lines(&config).unwrap();
        assert_eq!(left.x(1000.0), 30.0);
        assert_eq!(right.x(1000.0), 988.0);
        assert_eq!(left.color, config.left_debug_line_color);
    }

    #[test]
    fn test_refresh_only_reports_changes() {
        let mut lines = DebugLines::default();
        let mut config = HoverConfig::default();

        assert!(matches!(lines.refresh(&config), Some(LinesUpdate::Show(_))));
        assert_eq!(lines.refresh(&config), None);

        config.left_trigger_distance = 40.0;
        assert!(matches!(lines.refresh(&config), Some(LinesUpdate::Show(_))));

        config.show_debug_lines = false;
        assert_eq!(lines.refresh(&config), Some(LinesUpdate::Hide));
        assert_eq!(lines.refresh(&config), None);
    }

    #[test]
    fn test_hidden_from_start_needs_no_update() {
        let mut lines = DebugLines::default();
        let config = HoverConfig {
            show_debug_lines: false,
            ..HoverConfig::default()
        };
        assert_eq!(lines.refresh(&config), None);
        assert!(!lines.clear());
    }
}
