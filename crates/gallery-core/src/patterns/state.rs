//! State: a traffic light whose current state picks the next one

use super::{find_scenario, PatternDemo, PatternKind, ScenarioSpec};
use crate::transcript::{Comparison, Transcript};

const SCENARIOS: &[ScenarioSpec] = &[
    ScenarioSpec {
        id: "request",
        label: "Next signal",
        key: 'a',
    },
    ScenarioSpec {
        id: "cycle",
        label: "Full cycle",
        key: 's',
    },
];

/// Observable color of the light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Red,
    Green,
    Yellow,
}

impl Signal {
    pub fn label(self) -> &'static str {
        match self {
            Signal::Red => "Red",
            Signal::Green => "Green",
            Signal::Yellow => "Yellow",
        }
    }
}

pub trait LightState: Send {
    fn signal(&self) -> Signal;

    /// Perform this state's effect and hand back the state that follows it
    fn handle(&self, out: &mut Transcript) -> Box<dyn LightState>;
}

pub struct RedState;
pub struct GreenState;
pub struct YellowState;

impl LightState for RedState {
    fn signal(&self) -> Signal {
        Signal::Red
    }

    fn handle(&self, out: &mut Transcript) -> Box<dyn LightState> {
        out.step("Red: cars STOP. Switching to Green");
        Box::new(GreenState)
    }
}

impl LightState for GreenState {
    fn signal(&self) -> Signal {
        Signal::Green
    }

    fn handle(&self, out: &mut Transcript) -> Box<dyn LightState> {
        out.step("Green: cars GO. Switching to Yellow");
        Box::new(YellowState)
    }
}

impl LightState for YellowState {
    fn signal(&self) -> Signal {
        Signal::Yellow
    }

    fn handle(&self, out: &mut Transcript) -> Box<dyn LightState> {
        out.step("Yellow: cars SLOW DOWN. Switching to Red");
        Box::new(RedState)
    }
}

/// Context
pub struct TrafficLight {
    state: Box<dyn LightState>,
    requests: u64,
}

impl TrafficLight {
    /// Starts on red
    pub fn new() -> Self {
        Self {
            state: Box::new(RedState),
            requests: 0,
        }
    }

    pub fn signal(&self) -> Signal {
        self.state.signal()
    }

    pub fn requests(&self) -> u64 {
        self.requests
    }

    /// Delegate to the current state, then install the state it returned
    pub fn request(&mut self, out: &mut Transcript) {
        let next = self.state.handle(out);
        self.state = next;
        self.requests += 1;
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

pub struct StateDemo {
    light: TrafficLight,
}

impl StateDemo {
    pub fn new() -> Self {
        Self {
            light: TrafficLight::new(),
        }
    }

    pub fn light(&self) -> &TrafficLight {
        &self.light
    }

    fn requests(&mut self, count: usize) -> Transcript {
        let mut t = Transcript::new();
        for _ in 0..count {
            self.light.request(&mut t);
        }
        t.result(format!(
            "Light is now {} (after {} requests)",
            self.light.signal().label(),
            self.light.requests()
        ));
        t
    }
}

impl Default for StateDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternDemo for StateDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::State
    }

    fn scenarios(&self) -> &'static [ScenarioSpec] {
        SCENARIOS
    }

    fn run(&mut self, id: &str) -> Option<Transcript> {
        match find_scenario(SCENARIOS, id)?.id {
            "request" => Some(self.requests(1)),
            "cycle" => Some(self.requests(3)),
            _ => None,
        }
    }

    fn comparison(&self) -> Comparison {
        let mut good = Transcript::new();
        let mut light = TrafficLight::new();
        for _ in 0..3 {
            light.request(&mut good);
        }
        good.highlight("Each state owns its behavior and its successor");

        let mut bad = Transcript::new();
        let mut color = "red";
        for _ in 0..3 {
            bad.step(format!("match color {{ \"{color}\" => ... }}"));
            color = match color {
                "red" => "green",
                "green" => "yellow",
                _ => "red",
            };
        }
        bad.warning("Adding a flashing mode means editing every match on the color string");

        Comparison {
            good,
            bad,
            note: "State objects replace conditionals on a status flag: behavior and \
                   transitions live together, one type per state.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CYCLE: [Signal; 3] = [Signal::Red, Signal::Green, Signal::Yellow];

    #[test]
    fn test_n_requests_follow_the_cycle() {
        for n in 0..10 {
            let mut light = TrafficLight::new();
            let mut t = Transcript::new();
            for _ in 0..n {
                light.request(&mut t);
            }
            assert_eq!(light.signal(), CYCLE[n % 3], "after {n} requests");
            assert_eq!(t.len(), n);
        }
    }

    #[test]
    fn test_effects_match_the_state_handling_them() {
        let mut light = TrafficLight::new();
        let mut t = Transcript::new();
        for _ in 0..6 {
            light.request(&mut t);
        }
        let prefixes: Vec<&str> = t
            .texts()
            .map(|line| line.split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(
            prefixes,
            vec!["Red", "Green", "Yellow", "Red", "Green", "Yellow"]
        );
    }

    #[test]
    fn test_cycle_scenario_returns_to_red() {
        let mut demo = StateDemo::new();
        let t = demo.run("cycle").unwrap();
        assert_eq!(demo.light().signal(), Signal::Red);
        assert!(t.contains("Light is now Red (after 3 requests)"));
    }

    #[test]
    fn test_state_persists_between_requests() {
        let mut demo = StateDemo::new();
        demo.run("request");
        let t = demo.run("request").unwrap();
        assert!(t.contains("Green: cars GO"));
        assert_eq!(demo.light().signal(), Signal::Yellow);
    }
}
