//! State of the mounted pattern panel
//!
//! A panel owns a freshly mounted demo plus everything the user did with it:
//! the transcript, the side pane choice and the scroll position. Dropping the
//! panel drops all of it, which is how navigation unmounts a pattern.

use gallery_core::prelude::*;
use gallery_core::{Comparison, DemoOption, PatternDemo, PatternKind, ScenarioSpec, Transcript};

use crate::config::{Settings, TranscriptMode};
use crate::transcript_view_state::TranscriptViewState;

/// What the right-hand column shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidePane {
    #[default]
    Code,
    Comparison,
}

pub struct PanelState {
    demo: Box<dyn PatternDemo>,
    transcript: Transcript,
    mode: TranscriptMode,
    comparison: Option<Comparison>,
    /// Right-hand column
    pub pane: SidePane,
    /// Scroll position of the transcript
    pub view: TranscriptViewState,
    /// Scenario runs since mount
    pub runs: usize,
    /// Id of the most recent scenario
    pub last_scenario: Option<&'static str>,
}

impl std::fmt::Debug for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelState")
            .field("kind", &self.kind())
            .field("lines", &self.transcript.len())
            .field("pane", &self.pane)
            .field("runs", &self.runs)
            .finish()
    }
}

impl PanelState {
    /// Mount a fresh demo for `kind`
    pub fn mount(kind: PatternKind, settings: &Settings) -> Self {
        debug!("Mounting {} panel", kind);
        let mut panel = Self {
            demo: kind.mount_with_seed(settings.simulation.observer_seed),
            transcript: Transcript::new(),
            mode: settings.behavior.transcript,
            comparison: None,
            pane: SidePane::Code,
            view: TranscriptViewState::new(),
            runs: 0,
            last_scenario: None,
        };
        if settings.ui.show_comparison {
            panel.show_pane(SidePane::Comparison);
        }
        panel
    }

    pub fn kind(&self) -> PatternKind {
        self.demo.kind()
    }

    pub fn demo(&self) -> &dyn PatternDemo {
        self.demo.as_ref()
    }

    pub fn scenarios(&self) -> &'static [ScenarioSpec] {
        self.demo.scenarios()
    }

    pub fn options(&self) -> Vec<DemoOption> {
        self.demo.options()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Transcript together with its mutable scroll state, for rendering
    pub fn transcript_with_view(&mut self) -> (&Transcript, &mut TranscriptViewState) {
        (&self.transcript, &mut self.view)
    }

    /// Last computed comparison, present while the comparison pane is shown
    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    /// Execute a scenario and fold its lines into the transcript
    pub fn run(&mut self, id: &str) -> Result<()> {
        let kind = self.kind();
        let spec = self
            .scenarios()
            .iter()
            .find(|spec| spec.id == id)
            .ok_or_else(|| Error::unknown_scenario(kind.id(), id))?;
        let output = self
            .demo
            .run(spec.id)
            .ok_or_else(|| Error::unknown_scenario(kind.id(), id))?;

        debug!("{}/{} produced {} lines", kind.id(), spec.id, output.len());

        match self.mode {
            TranscriptMode::Replace => {
                self.transcript = output;
                self.view.reset();
            }
            TranscriptMode::Append => {
                self.transcript
                    .info(format!("── #{} {} ──", self.runs + 1, spec.label));
                self.transcript.extend(output);
                self.view.auto_scroll = true;
            }
        }
        self.runs += 1;
        self.last_scenario = Some(spec.id);
        Ok(())
    }

    /// Flip a demo option; returns false if the demo has no such option
    pub fn toggle_option(&mut self, id: &str) -> bool {
        let Some(current) = self.options().into_iter().find(|o| o.id == id) else {
            return false;
        };
        self.demo.set_option(current.id, !current.enabled)
    }

    pub fn toggle_pane(&mut self) {
        let next = match self.pane {
            SidePane::Code => SidePane::Comparison,
            SidePane::Comparison => SidePane::Code,
        };
        self.show_pane(next);
    }

    /// Switch panes; opening the comparison pane runs both paths afresh
    pub fn show_pane(&mut self, pane: SidePane) {
        self.pane = pane;
        self.comparison = match pane {
            SidePane::Comparison => Some(self.demo.comparison()),
            SidePane::Code => None,
        };
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
        self.view.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(mode: TranscriptMode) -> Settings {
        let mut settings = Settings::default();
        settings.behavior.transcript = mode;
        settings.simulation.observer_seed = Some(5);
        settings
    }

    #[test]
    fn test_replace_mode_keeps_only_latest_run() {
        let mut panel = PanelState::mount(PatternKind::FactoryMethod, &settings(TranscriptMode::Replace));
        panel.run("road").unwrap();
        panel.run("sea").unwrap();

        assert!(panel.transcript().contains("Ship"));
        assert!(!panel.transcript().contains("Truck"));
        assert_eq!(panel.runs, 2);
        assert_eq!(panel.last_scenario, Some("sea"));
    }

    #[test]
    fn test_append_mode_keeps_every_run_under_headers() {
        let mut panel = PanelState::mount(PatternKind::FactoryMethod, &settings(TranscriptMode::Append));
        panel.run("road").unwrap();
        panel.run("sea").unwrap();

        assert!(panel.transcript().contains("Truck"));
        assert!(panel.transcript().contains("Ship"));
        assert!(panel.transcript().contains("── #1"));
        assert!(panel.transcript().contains("── #2"));
    }

    #[test]
    fn test_unknown_scenario_is_recoverable_error() {
        let mut panel = PanelState::mount(PatternKind::Proxy, &Settings::default());
        let err = panel.run("show-third").unwrap_err();
        assert!(matches!(err, Error::UnknownScenario { .. }));
        assert!(panel.transcript().is_empty());
        assert_eq!(panel.runs, 0);
    }

    #[test]
    fn test_toggle_option_flips_decorator_layer() {
        let mut panel = PanelState::mount(PatternKind::Decorator, &Settings::default());
        assert!(panel.toggle_option("milk"));
        assert!(panel.options().iter().any(|o| o.id == "milk" && o.enabled));
        assert!(panel.toggle_option("milk"));
        assert!(panel.options().iter().all(|o| !o.enabled));
        assert!(!panel.toggle_option("caramel"));
    }

    #[test]
    fn test_options_absent_outside_decorator() {
        let mut panel = PanelState::mount(PatternKind::State, &Settings::default());
        assert!(panel.options().is_empty());
        assert!(!panel.toggle_option("milk"));
    }

    #[test]
    fn test_comparison_pane_computes_comparison() {
        let mut panel = PanelState::mount(PatternKind::AbstractFactory, &Settings::default());
        assert!(panel.comparison().is_none());

        panel.toggle_pane();
        assert_eq!(panel.pane, SidePane::Comparison);
        assert!(panel.comparison().unwrap().bad.contains("Mixed families"));

        panel.toggle_pane();
        assert_eq!(panel.pane, SidePane::Code);
        assert!(panel.comparison().is_none());
    }

    #[test]
    fn test_show_comparison_setting_opens_on_comparison() {
        let mut settings = Settings::default();
        settings.ui.show_comparison = true;
        let panel = PanelState::mount(PatternKind::Visitor, &settings);
        assert_eq!(panel.pane, SidePane::Comparison);
        assert!(panel.comparison().is_some());
    }

    #[test]
    fn test_clear_transcript() {
        let mut panel = PanelState::mount(PatternKind::Singleton, &Settings::default());
        panel.run("access").unwrap();
        panel.clear_transcript();
        assert!(panel.transcript().is_empty());
        assert_eq!(panel.runs, 1);
    }
}
