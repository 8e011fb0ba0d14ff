//! Factory Method: logistics creators pick which transport to build

use super::{find_scenario, PatternDemo, PatternKind, ScenarioSpec};
use crate::transcript::{Comparison, Transcript};

const SCENARIOS: &[ScenarioSpec] = &[
    ScenarioSpec {
        id: "road",
        label: "Road logistics",
        key: 'a',
    },
    ScenarioSpec {
        id: "sea",
        label: "Sea logistics",
        key: 's',
    },
];

/// Product
pub trait Transport {
    fn name(&self) -> &'static str;
    fn deliver(&self, cargo: &str) -> String;
}

pub struct Truck;

impl Transport for Truck {
    fn name(&self) -> &'static str {
        "Truck"
    }

    fn deliver(&self, cargo: &str) -> String {
        format!("Truck delivers {cargo} by road in a box")
    }
}

pub struct Ship;

impl Transport for Ship {
    fn name(&self) -> &'static str {
        "Ship"
    }

    fn deliver(&self, cargo: &str) -> String {
        format!("Ship delivers {cargo} by sea in a container")
    }
}

/// Creator; subclasses override only the factory method
pub trait Logistics {
    fn name(&self) -> &'static str;

    fn create_transport(&self) -> Box<dyn Transport>;

    /// Business logic shared by every creator, written against the product trait
    fn plan_delivery(&self, cargo: &str, out: &mut Transcript) {
        out.step(format!("{}::create_transport()", self.name()));
        let transport = self.create_transport();
        out.step(format!("-> created a {}", transport.name()));
        out.result(transport.deliver(cargo));
    }
}

pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn name(&self) -> &'static str {
        "RoadLogistics"
    }

    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn name(&self) -> &'static str {
        "SeaLogistics"
    }

    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

/// Two-valued user choice mapped straight to a creator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Road,
    Sea,
}

impl Route {
    pub fn logistics(self) -> Box<dyn Logistics> {
        match self {
            Route::Road => Box::new(RoadLogistics),
            Route::Sea => Box::new(SeaLogistics),
        }
    }
}

pub struct FactoryMethodDemo;

impl FactoryMethodDemo {
    fn deliver(&self, route: Route) -> Transcript {
        let mut t = Transcript::new();
        let logistics = route.logistics();
        t.info(format!("Client picked {}", logistics.name()));
        logistics.plan_delivery("20 boxes of coffee beans", &mut t);
        t
    }
}

impl PatternDemo for FactoryMethodDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::FactoryMethod
    }

    fn scenarios(&self) -> &'static [ScenarioSpec] {
        SCENARIOS
    }

    fn run(&mut self, id: &str) -> Option<Transcript> {
        match find_scenario(SCENARIOS, id)?.id {
            "road" => Some(self.deliver(Route::Road)),
            "sea" => Some(self.deliver(Route::Sea)),
            _ => None,
        }
    }

    fn comparison(&self) -> Comparison {
        let mut good = self.deliver(Route::Road);
        good.extend(self.deliver(Route::Sea));
        good.highlight("Adding AirLogistics means one new creator; plan_delivery is untouched");

        let mut bad = Transcript::new();
        for kind in ["truck", "ship"] {
            bad.step(format!("if kind == \"{kind}\" {{ ... }}"));
            let message = if kind == "truck" {
                Truck.deliver("20 boxes of coffee beans")
            } else {
                Ship.deliver("20 boxes of coffee beans")
            };
            bad.result(message);
        }
        bad.warning("Every new transport means editing this if/else chain in the client");

        Comparison {
            good,
            bad,
            note: "The factory method moves the 'which class?' decision into creators, so \
                   client code depends only on the Transport trait.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_creator_builds_its_own_product() {
        assert_eq!(RoadLogistics.create_transport().name(), "Truck");
        assert_eq!(SeaLogistics.create_transport().name(), "Ship");
    }

    #[test]
    fn test_products_are_fresh_per_call() {
        let logistics = Route::Sea.logistics();
        let a = logistics.create_transport();
        let b = logistics.create_transport();
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_road_scenario_transcript() {
        let t = FactoryMethodDemo.run("road").unwrap();
        let texts: Vec<&str> = t.texts().collect();
        assert_eq!(texts[0], "Client picked RoadLogistics");
        assert!(t.contains("created a Truck"));
        assert!(t.contains("by road"));
        assert!(!t.contains("Ship"));
    }

    #[test]
    fn test_sea_scenario_transcript() {
        let t = FactoryMethodDemo.run("sea").unwrap();
        assert!(t.contains("created a Ship"));
        assert!(t.contains("by sea"));
    }
}
