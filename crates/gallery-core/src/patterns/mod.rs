//! The nine pattern simulations and the contract the shell drives them through
//!
//! Each submodule owns a tiny object model shaped like its pattern plus a
//! [`PatternDemo`] implementation exposing the scenarios a user can trigger.

pub mod abstract_factory;
pub mod adapter;
pub mod decorator;
pub mod factory_method;
pub mod observer;
pub mod proxy;
pub mod singleton;
pub mod state;
pub mod visitor;

use serde::Serialize;

use crate::transcript::{Comparison, Transcript};

/// Gang-of-Four grouping of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }
}

/// Identifies one of the nine demonstrated patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Singleton,
    FactoryMethod,
    AbstractFactory,
    Adapter,
    Decorator,
    Proxy,
    Observer,
    Visitor,
    State,
}

impl PatternKind {
    /// Every pattern, in gallery order
    pub const ALL: [PatternKind; 9] = [
        PatternKind::Singleton,
        PatternKind::FactoryMethod,
        PatternKind::AbstractFactory,
        PatternKind::Adapter,
        PatternKind::Decorator,
        PatternKind::Proxy,
        PatternKind::Observer,
        PatternKind::Visitor,
        PatternKind::State,
    ];

    /// Stable kebab-case identifier used on the command line and in config
    pub fn id(&self) -> &'static str {
        match self {
            PatternKind::Singleton => "singleton",
            PatternKind::FactoryMethod => "factory-method",
            PatternKind::AbstractFactory => "abstract-factory",
            PatternKind::Adapter => "adapter",
            PatternKind::Decorator => "decorator",
            PatternKind::Proxy => "proxy",
            PatternKind::Observer => "observer",
            PatternKind::Visitor => "visitor",
            PatternKind::State => "state",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PatternKind::Singleton => "Singleton",
            PatternKind::FactoryMethod => "Factory Method",
            PatternKind::AbstractFactory => "Abstract Factory",
            PatternKind::Adapter => "Adapter",
            PatternKind::Decorator => "Decorator",
            PatternKind::Proxy => "Proxy",
            PatternKind::Observer => "Observer",
            PatternKind::Visitor => "Visitor",
            PatternKind::State => "State",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            PatternKind::Singleton | PatternKind::FactoryMethod | PatternKind::AbstractFactory => {
                Category::Creational
            }
            PatternKind::Adapter | PatternKind::Decorator | PatternKind::Proxy => {
                Category::Structural
            }
            PatternKind::Observer | PatternKind::Visitor | PatternKind::State => {
                Category::Behavioral
            }
        }
    }

    /// One-sentence intent shown above the scenario buttons
    pub fn summary(&self) -> &'static str {
        match self {
            PatternKind::Singleton => {
                "Ensure a type has exactly one instance and a global access point to it."
            }
            PatternKind::FactoryMethod => {
                "Let a creator decide which concrete product to instantiate."
            }
            PatternKind::AbstractFactory => {
                "Create families of related objects without naming their concrete types."
            }
            PatternKind::Adapter => {
                "Wrap an incompatible interface so clients can use the one they expect."
            }
            PatternKind::Decorator => {
                "Attach responsibilities to an object dynamically by wrapping it."
            }
            PatternKind::Proxy => {
                "Stand in for an expensive object and create it only when needed."
            }
            PatternKind::Observer => {
                "Notify every dependent automatically when a subject changes."
            }
            PatternKind::Visitor => {
                "Add operations over a structure without changing the element types."
            }
            PatternKind::State => {
                "Let an object change its behavior when its internal state changes."
            }
        }
    }

    /// Illustrative source listing for the code pane
    pub fn snippet(&self) -> &'static str {
        crate::snippets::snippet_for(*self)
    }

    /// Resolve a pattern from its id or label, case-insensitively
    ///
    /// Spaces, underscores and hyphens are treated alike, so `"Factory Method"`,
    /// `"factory_method"` and `"factory-method"` all resolve.
    pub fn from_name(name: &str) -> Option<PatternKind> {
        let wanted = normalize(name);
        Self::ALL
            .into_iter()
            .find(|kind| normalize(kind.id()) == wanted || normalize(kind.label()) == wanted)
    }

    /// Create a fresh instance of this pattern's demo
    pub fn mount(&self) -> Box<dyn PatternDemo> {
        self.mount_with_seed(None)
    }

    /// Like [`PatternKind::mount`], fixing the seed of any random readings
    pub fn mount_with_seed(&self, seed: Option<u64>) -> Box<dyn PatternDemo> {
        match self {
            PatternKind::Singleton => Box::new(singleton::SingletonDemo),
            PatternKind::FactoryMethod => Box::new(factory_method::FactoryMethodDemo),
            PatternKind::AbstractFactory => Box::new(abstract_factory::AbstractFactoryDemo),
            PatternKind::Adapter => Box::new(adapter::AdapterDemo),
            PatternKind::Decorator => Box::new(decorator::DecoratorDemo::new()),
            PatternKind::Proxy => Box::new(proxy::ProxyDemo::new()),
            PatternKind::Observer => Box::new(match seed {
                Some(seed) => observer::ObserverDemo::with_seed(seed),
                None => observer::ObserverDemo::new(),
            }),
            PatternKind::Visitor => Box::new(visitor::VisitorDemo::new()),
            PatternKind::State => Box::new(state::StateDemo::new()),
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A trigger button offered by a demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioSpec {
    /// Stable identifier passed to [`PatternDemo::run`]
    pub id: &'static str,
    /// Button caption
    pub label: &'static str,
    /// Keyboard shortcut in the TUI
    pub key: char,
}

/// A boolean toggle offered by a demo, with its current value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoOption {
    pub id: &'static str,
    pub label: &'static str,
    pub key: char,
    pub enabled: bool,
}

/// Contract every pattern panel implements
pub trait PatternDemo: Send {
    fn kind(&self) -> PatternKind;

    /// The fixed list of trigger buttons
    fn scenarios(&self) -> &'static [ScenarioSpec];

    /// Execute one scenario; `None` if `id` is not one of [`PatternDemo::scenarios`]
    fn run(&mut self, id: &str) -> Option<Transcript>;

    /// Boolean toggles feeding the next scenario run
    fn options(&self) -> Vec<DemoOption> {
        Vec::new()
    }

    /// Set a toggle; returns false if the demo has no such option
    fn set_option(&mut self, _id: &str, _enabled: bool) -> bool {
        false
    }

    /// Run the "with vs. without the pattern" pair
    fn comparison(&self) -> Comparison;
}

/// Look up a scenario by id in a static table
pub fn find_scenario(table: &'static [ScenarioSpec], id: &str) -> Option<&'static ScenarioSpec> {
    table.iter().find(|spec| spec.id == id)
}
