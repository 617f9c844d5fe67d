//! Runtime: owns the model and the host, executes commands
//!
//! The host's event loop feeds events in and calls [`HoverSidebar::tick`]
//! whenever [`HoverSidebar::next_deadline`] passes. Nothing here blocks or
//! spawns; every effect lands on the host before the call returns.

use std::path::PathBuf;
use std::time::Instant;

use crate::commands::Cmd;
use crate::config::{ConfigLoad, ConfigPatch, HoverConfig};
use crate::geometry::Viewport;
use crate::host::PanelHost;
use crate::menu::{sidebar_menu_entries, toggle_button_side, MenuEntry};
use crate::messages::{AppMsg, Msg, PanelMsg};
use crate::model::HoverModel;
use crate::panel::PanelSide;
use crate::update::update;

/// An activated hover-sidebar instance bound to a host
pub struct HoverSidebar<H: PanelHost> {
    model: HoverModel,
    host: H,
    /// Where `Cmd::SaveConfig` writes; `None` keeps settings in memory only
    config_path: Option<PathBuf>,
}

impl<H: PanelHost> HoverSidebar<H> {
    /// Activate with already-loaded settings
    ///
    /// Surfaces the load notice (if any), reads initial panel state from the
    /// host and applies floating classes and boundary lines.
    pub fn activate(host: H, load: ConfigLoad, viewport: Viewport, now: Instant) -> Self {
        let mut sidebar = Self {
            model: HoverModel::new(load.config, viewport),
            host,
            config_path: None,
        };
        if let Some(notice) = load.notice {
            sidebar.host.notice(&notice);
        }
        sidebar.dispatch(Msg::App(AppMsg::Activate), now);
        sidebar
    }

    /// Activate with settings loaded from (and saved back to) `path`
    pub fn activate_with_config_file(
        host: H,
        path: PathBuf,
        viewport: Viewport,
        now: Instant,
    ) -> Self {
        let load = HoverConfig::load_from(&path);
        let mut sidebar = Self::activate(host, load, viewport, now);
        sidebar.config_path = Some(path);
        sidebar
    }

    /// Activate with settings from `~/.config/hover-sidebar/config.json`
    ///
    /// Changes are saved back there. Without a config directory, settings
    /// stay in memory.
    pub fn activate_default(host: H, viewport: Viewport, now: Instant) -> Self {
        let load = HoverConfig::load();
        let mut sidebar = Self::activate(host, load, viewport, now);
        sidebar.config_path = crate::config_paths::config_file();
        sidebar
    }

    /// Cancel every timer, strip presentation and hand the host back
    ///
    /// Consumes the instance, so no timer can fire afterwards.
    pub fn deactivate(mut self, now: Instant) -> H {
        self.dispatch(Msg::App(AppMsg::Deactivate), now);
        self.host
    }

    /// Run one message through update and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg, now: Instant) {
        if let Some(cmd) = update(&mut self.model, &self.host, msg, now) {
            self.execute(cmd);
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, now: Instant) {
        self.dispatch(Msg::pointer_moved(x, y), now);
    }

    pub fn pointer_left_window(&mut self, now: Instant) {
        self.dispatch(Msg::window_left(), now);
    }

    pub fn notify_resize(&mut self, width: f64, height: f64, now: Instant) {
        self.dispatch(Msg::resize(width, height), now);
    }

    pub fn toggle_pinned(&mut self, side: PanelSide, now: Instant) {
        self.dispatch(Msg::toggle_pinned(side), now);
    }

    pub fn toggle_floating(&mut self, side: PanelSide, now: Instant) {
        self.dispatch(Msg::toggle_floating(side), now);
    }

    pub fn resize_started(&mut self, side: PanelSide, now: Instant) {
        self.dispatch(Msg::Panel(PanelMsg::ResizeStarted(side)), now);
    }

    pub fn resize_ended(&mut self, side: PanelSide, now: Instant) {
        self.dispatch(Msg::Panel(PanelMsg::ResizeEnded(side)), now);
    }

    pub fn update_configuration(&mut self, patch: ConfigPatch, now: Instant) {
        self.dispatch(Msg::App(AppMsg::UpdateConfig(patch)), now);
    }

    /// Fire everything due at `now`
    pub fn tick(&mut self, now: Instant) {
        self.dispatch(Msg::Tick, now);
    }

    /// When the event loop should next call [`tick`](Self::tick)
    pub fn next_deadline(&self) -> Option<Instant> {
        self.model.next_deadline()
    }

    /// Entries to inject into a menu opened from an element with this ancestry
    pub fn menu_entries<A, C>(&self, ancestry: A) -> Vec<MenuEntry>
    where
        A: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        match toggle_button_side(ancestry) {
            Some(side) => sidebar_menu_entries(&self.model.panels, side),
            None => Vec::new(),
        }
    }

    pub fn model(&self) -> &HoverModel {
        &self.model
    }

    pub fn config(&self) -> &HoverConfig {
        &self.model.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    fn execute(&mut self, cmd: Cmd) {
        for cmd in cmd.flatten() {
            match cmd {
                Cmd::None | Cmd::Batch(_) => {}
                Cmd::Expand(side) => self.host.expand(side),
                Cmd::Collapse(side) => self.host.collapse(side),
                Cmd::SetFloatingClass { side, floating } => {
                    self.host.set_floating_class(side, floating)
                }
                Cmd::ShowBoundaryLines(lines) => self.host.show_boundary_lines(&lines),
                Cmd::HideBoundaryLines => self.host.hide_boundary_lines(),
                Cmd::SaveConfig => self.save_config(),
                Cmd::Notice(message) => self.host.notice(&message),
            }
        }
    }

    fn save_config(&mut self) {
        let Some(path) = &self.config_path else {
            tracing::trace!("no config path, settings kept in memory");
            return;
        };
        if let Err(e) = self.model.config.save_to(path) {
            tracing::warn!("Failed to save settings: {}", e);
            self.host
                .notice(&format!("Hover Sidebar: failed to save settings: {}", e));
        }
    }
}
