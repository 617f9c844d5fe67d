//! Trace replayer for hover timing
//!
//! Feeds a YAML event trace through `HoverSidebar` against an in-memory
//! workspace and prints every host call with its timestamp.
//!
//! Usage:
//!   cargo run --bin replay -- traces/leave-and-return.yaml
//!   cargo run --bin replay -- trace.yaml --width 1440 --config my-settings.json
//!
//! Trace format:
//! ```yaml
//! panels:
//!   left: { collapsed: true }
//!   right: { collapsed: false, pinned: true }
//! events:
//!   - { at: 0, event: move, x: 10, y: 300 }
//!   - { at: 40, event: move, x: 500, y: 300 }
//!   - { at: 900, event: leave }
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use hover_sidebar::config::ConfigLoad;
use hover_sidebar::debug_lines::BoundaryLine;
use hover_sidebar::geometry::{Rect, Viewport};
use hover_sidebar::{HoverConfig, HoverSidebar, PanelHost, PanelSide};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "replay", about = "Replay a pointer trace through the hover sidebar")]
struct Args {
    /// Path to the trace YAML file
    trace: PathBuf,
    /// Override window width in logical pixels
    #[arg(long)]
    width: Option<f64>,
    /// Override window height in logical pixels
    #[arg(long)]
    height: Option<f64>,
    /// Settings JSON to load instead of defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Trace YAML schema
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug)]
struct Trace {
    #[serde(default = "default_width")]
    width: f64,
    #[serde(default = "default_height")]
    height: f64,
    #[serde(default)]
    panels: TracePanels,
    events: Vec<Step>,
}

#[derive(Deserialize, Debug, Default)]
struct TracePanels {
    #[serde(default)]
    left: TracePanel,
    #[serde(default)]
    right: TracePanel,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
struct TracePanel {
    present: bool,
    collapsed: bool,
    pinned: bool,
    width: f64,
}

impl Default for TracePanel {
    fn default() -> Self {
        Self {
            present: true,
            collapsed: true,
            pinned: false,
            width: 250.0,
        }
    }
}

#[derive(Deserialize, Debug)]
struct Step {
    /// Milliseconds since activation
    at: u64,
    #[serde(flatten)]
    event: Event,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(tag = "event", rename_all = "lowercase")]
enum Event {
    Move { x: f64, y: f64 },
    Leave,
    Resize { width: f64, height: f64 },
    Pin { side: PanelSide },
    Float { side: PanelSide },
    Overlay { open: bool },
    Tick,
}

fn default_width() -> f64 {
    1000.0
}
fn default_height() -> f64 {
    600.0
}

// ---------------------------------------------------------------------------
// Printing host
// ---------------------------------------------------------------------------

struct TraceHost {
    panels: [TracePanel; 2],
    viewport: Viewport,
    overlay_open: bool,
    /// Timestamp printed with each call
    now_ms: u64,
}

impl TraceHost {
    fn panel(&self, side: PanelSide) -> &TracePanel {
        &self.panels[side as usize]
    }

    fn log(&self, what: impl std::fmt::Display) {
        println!("{:>7} ms  {}", self.now_ms, what);
    }
}

impl PanelHost for TraceHost {
    fn has_panel(&self, side: PanelSide) -> bool {
        self.panel(side).present
    }

    fn expand(&mut self, side: PanelSide) {
        self.panels[side as usize].collapsed = false;
        self.log(format_args!("expand {}", side));
    }

    fn collapse(&mut self, side: PanelSide) {
        self.panels[side as usize].collapsed = true;
        self.log(format_args!("collapse {}", side));
    }

    fn set_floating_class(&mut self, side: PanelSide, floating: bool) {
        self.log(format_args!("floating {} = {}", side, floating));
    }

    fn is_collapsed(&self, side: PanelSide) -> bool {
        self.panel(side).collapsed
    }

    fn panel_bounds(&self, side: PanelSide) -> Option<Rect> {
        let panel = self.panel(side);
        if !panel.present || panel.collapsed {
            return None;
        }
        let x = match side {
            PanelSide::Left => 0.0,
            PanelSide::Right => self.viewport.width - panel.width,
        };
        Some(Rect::new(x, 0.0, panel.width, self.viewport.height))
    }

    fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    fn is_pinned(&self, side: PanelSide) -> bool {
        self.panel(side).pinned
    }

    fn show_boundary_lines(&mut self, lines: &[BoundaryLine; 2]) {
        for line in lines {
            self.log(format_args!(
                "boundary {} at x={} ({})",
                line.side,
                line.x(self.viewport.width),
                line.color.to_hex()
            ));
        }
    }

    fn hide_boundary_lines(&mut self) {
        self.log("boundary lines hidden");
    }

    fn notice(&mut self, message: &str) {
        self.log(format_args!("notice: {}", message));
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Fire every deadline up to and including `until`
fn run_timers(sidebar: &mut HoverSidebar<TraceHost>, t0: Instant, until: Instant) {
    while let Some(deadline) = sidebar.next_deadline() {
        if deadline > until {
            break;
        }
        sidebar.host_mut().now_ms = deadline.duration_since(t0).as_millis() as u64;
        sidebar.tick(deadline);
    }
}

fn apply_event(sidebar: &mut HoverSidebar<TraceHost>, event: Event, now: Instant) {
    match event {
        Event::Move { x, y } => sidebar.pointer_moved(x, y, now),
        Event::Leave => sidebar.pointer_left_window(now),
        Event::Resize { width, height } => {
            sidebar.host_mut().viewport = Viewport::new(width, height);
            sidebar.notify_resize(width, height, now);
        }
        Event::Pin { side } => sidebar.toggle_pinned(side, now),
        Event::Float { side } => sidebar.toggle_floating(side, now),
        Event::Overlay { open } => sidebar.host_mut().overlay_open = open,
        Event::Tick => sidebar.tick(now),
    }
}

fn main() -> Result<()> {
    hover_sidebar::tracing::init();

    let args = Args::parse();
    let content = std::fs::read_to_string(&args.trace)
        .with_context(|| format!("reading {}", args.trace.display()))?;
    let mut trace: Trace = serde_yaml::from_str(&content)
        .with_context(|| format!("parsing {}", args.trace.display()))?;

    if let Some(w) = args.width {
        trace.width = w;
    }
    if let Some(h) = args.height {
        trace.height = h;
    }

    let load = match &args.config {
        Some(path) => HoverConfig::load_from(path),
        None => ConfigLoad {
            config: HoverConfig::default(),
            notice: None,
        },
    };

    let viewport = Viewport::new(trace.width, trace.height);
    let host = TraceHost {
        panels: [trace.panels.left, trace.panels.right],
        viewport,
        overlay_open: false,
        now_ms: 0,
    };

    if let Some(log) = hover_sidebar::config_paths::log_file() {
        eprintln!("Debug log: {}", log.display());
    }
    eprintln!(
        "Replaying {} event(s) at {}x{}",
        trace.events.len(),
        trace.width,
        trace.height
    );

    let t0 = Instant::now();
    let mut sidebar = HoverSidebar::activate(host, load, viewport, t0);

    let mut last_at = 0;
    for step in &trace.events {
        if step.at < last_at {
            anyhow::bail!(
                "event at {} ms is earlier than previous event at {} ms",
                step.at,
                last_at
            );
        }
        last_at = step.at;

        let now = t0 + Duration::from_millis(step.at);
        run_timers(&mut sidebar, t0, now);
        sidebar.host_mut().now_ms = step.at;
        apply_event(&mut sidebar, step.event, now);
    }

    // Let whatever is still pending play out
    let horizon = t0 + Duration::from_millis(last_at) + Duration::from_secs(3600);
    run_timers(&mut sidebar, t0, horizon);

    sidebar.deactivate(t0 + Duration::from_millis(last_at));

    eprintln!("Done!");
    Ok(())
}
