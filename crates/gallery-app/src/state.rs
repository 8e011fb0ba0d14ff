//! Application state (Model in TEA pattern)

use gallery_core::prelude::*;
use gallery_core::PatternKind;

use crate::config::Settings;
use crate::navigation::Navigation;
use crate::panel::PanelState;

/// Ticks a status message stays visible (~3s at the 50ms poll interval)
const STATUS_TICKS: u16 = 60;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Short-lived message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    ticks_left: u16,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            ticks_left: STATUS_TICKS,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            ticks_left: STATUS_TICKS,
        }
    }

    /// Count down one tick; false once expired
    fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left > 0
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Registry and active entry
    pub navigation: Navigation,

    /// The mounted pattern
    pub panel: PanelState,

    /// Application settings from config file
    pub settings: Settings,

    /// Transient status bar message
    pub status: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Start on the configured pattern, falling back to the first entry
    pub fn with_settings(settings: Settings) -> Self {
        let start = match PatternKind::from_name(&settings.behavior.start_pattern) {
            Some(kind) => kind,
            None => {
                warn!(
                    "Unknown start_pattern '{}', starting on {}",
                    settings.behavior.start_pattern,
                    PatternKind::Singleton
                );
                PatternKind::Singleton
            }
        };
        Self::starting_on(start, settings)
    }

    pub fn starting_on(start: PatternKind, settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            navigation: Navigation::new(start),
            panel: PanelState::mount(start, &settings),
            settings,
            status: None,
        }
    }

    pub fn active(&self) -> PatternKind {
        self.navigation.active()
    }

    /// Select by index; remounts only when the active entry changed
    pub fn select_pattern(&mut self, index: usize) {
        if self.navigation.select(index) {
            self.remount();
        }
    }

    pub fn next_pattern(&mut self) {
        self.navigation.next();
        self.remount();
    }

    pub fn previous_pattern(&mut self) {
        self.navigation.previous();
        self.remount();
    }

    /// Drop the current panel and mount a fresh one for the active entry
    fn remount(&mut self) {
        let kind = self.navigation.active();
        info!("Switched to {}", kind);
        self.panel = PanelState::mount(kind, &self.settings);
        self.status = None;
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Age the status message, clearing it once expired
    pub fn tick(&mut self) {
        if let Some(status) = self.status.as_mut() {
            if !status.tick() {
                self.status = None;
            }
        }
    }

    /// Request application quit
    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
