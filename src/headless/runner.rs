//! Headless mode runner - scenario execution without the TUI

use gallery_core::prelude::*;
use gallery_core::{PatternDemo, PatternKind};

use super::HeadlessEvent;

/// What to run
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Pattern name or id; every pattern when absent
    pub pattern: Option<String>,
    /// Scenario id; every scenario of the pattern when absent
    pub scenario: Option<String>,
    /// Also emit the good-vs-bad comparison
    pub compare: bool,
    /// Seed for the observer's random readings
    pub seed: Option<u64>,
}

/// Run in headless mode, writing NDJSON events to stdout
///
/// Failures are reported as an `error` event before being returned.
pub fn run_headless(options: &HeadlessOptions) -> Result<()> {
    info!("Pattern Gallery starting in headless mode");
    let result = run_with_sink(options, |event| event.emit());
    if let Err(ref e) = result {
        error!("Headless run failed: {}", e);
        HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
    }
    result
}

/// Run scenarios, handing every event to `sink`
pub fn run_with_sink(options: &HeadlessOptions, mut sink: impl FnMut(HeadlessEvent)) -> Result<()> {
    let kinds = match options.pattern.as_deref() {
        Some(name) => vec![PatternKind::from_name(name).ok_or_else(|| Error::unknown_pattern(name))?],
        None => PatternKind::ALL.to_vec(),
    };

    for kind in kinds {
        run_pattern(kind, options, &mut sink)?;
    }
    Ok(())
}

fn run_pattern(
    kind: PatternKind,
    options: &HeadlessOptions,
    sink: &mut impl FnMut(HeadlessEvent),
) -> Result<()> {
    // One demo per pattern, so stateful demos carry over between scenarios
    let mut demo = kind.mount_with_seed(options.seed);
    sink(HeadlessEvent::pattern_mounted(kind));

    let scenarios: Vec<&'static str> = match options.scenario.as_deref() {
        Some(id) => {
            let spec = demo
                .scenarios()
                .iter()
                .find(|spec| spec.id == id)
                .ok_or_else(|| Error::unknown_scenario(kind.id(), id))?;
            vec![spec.id]
        }
        None => demo.scenarios().iter().map(|spec| spec.id).collect(),
    };

    for id in scenarios {
        run_scenario(demo.as_mut(), kind, id, sink)?;
    }

    if options.compare {
        sink(HeadlessEvent::comparison(kind, &demo.comparison()));
    }
    Ok(())
}

fn run_scenario(
    demo: &mut dyn PatternDemo,
    kind: PatternKind,
    id: &str,
    sink: &mut impl FnMut(HeadlessEvent),
) -> Result<()> {
    sink(HeadlessEvent::scenario_started(kind, id));
    let transcript = demo
        .run(id)
        .ok_or_else(|| Error::unknown_scenario(kind.id(), id))?;
    debug!("{}/{} produced {} lines", kind.id(), id, transcript.len());

    for event in HeadlessEvent::lines(kind, id, &transcript) {
        sink(event);
    }
    sink(HeadlessEvent::scenario_finished(kind, id, transcript.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(options: &HeadlessOptions) -> Result<Vec<HeadlessEvent>> {
        let mut events = Vec::new();
        run_with_sink(options, |event| events.push(event))?;
        Ok(events)
    }

    #[test]
    fn test_single_scenario_event_order() {
        let options = HeadlessOptions {
            pattern: Some("visitor".to_string()),
            scenario: Some("area".to_string()),
            ..Default::default()
        };
        let events = collect(&options).unwrap();

        assert!(matches!(events[0], HeadlessEvent::PatternMounted { pattern: "visitor", .. }));
        assert!(matches!(events[1], HeadlessEvent::ScenarioStarted { .. }));
        assert!(matches!(events.last(), Some(HeadlessEvent::ScenarioFinished { .. })));

        let line_count = events
            .iter()
            .filter(|e| matches!(e, HeadlessEvent::Line { .. }))
            .count();
        match events.last() {
            Some(HeadlessEvent::ScenarioFinished { lines, .. }) => assert_eq!(*lines, line_count),
            other => panic!("unexpected last event: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_pattern_is_fatal_error() {
        let options = HeadlessOptions {
            pattern: Some("builder".to_string()),
            ..Default::default()
        };
        let err = collect(&options).unwrap_err();
        assert!(matches!(err, Error::UnknownPattern { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_unknown_scenario_is_reported() {
        let options = HeadlessOptions {
            pattern: Some("adapter".to_string()),
            scenario: Some("refund".to_string()),
            ..Default::default()
        };
        let err = collect(&options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Pattern 'adapter' has no scenario named 'refund'"
        );
    }

    #[test]
    fn test_state_carries_over_between_scenarios() {
        let options = HeadlessOptions {
            pattern: Some("state".to_string()),
            ..Default::default()
        };
        let events = collect(&options).unwrap();
        let texts: Vec<&str> = events
            .iter()
            .filter_map(|e| match e {
                HeadlessEvent::Line { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        // request (1) then cycle (3 more)
        assert!(texts.iter().any(|t| t.contains("after 1 requests")));
        assert!(texts.iter().any(|t| t.contains("after 4 requests")));
    }

    #[test]
    fn test_compare_adds_comparison_event() {
        let options = HeadlessOptions {
            pattern: Some("Abstract Factory".to_string()),
            scenario: Some("light".to_string()),
            compare: true,
            ..Default::default()
        };
        let events = collect(&options).unwrap();
        match events.last() {
            Some(HeadlessEvent::Comparison { bad, .. }) => {
                assert!(bad.iter().any(|t| t.contains("Mixed families")));
            }
            other => panic!("expected comparison, got {other:?}"),
        }
    }
}
