//! Abstract Factory: themed widget families

use super::{find_scenario, PatternDemo, PatternKind, ScenarioSpec};
use crate::transcript::{Comparison, Transcript};

const SCENARIOS: &[ScenarioSpec] = &[
    ScenarioSpec {
        id: "light",
        label: "Light theme",
        key: 'a',
    },
    ScenarioSpec {
        id: "dark",
        label: "Dark theme",
        key: 's',
    },
];

/// The theme a concrete product belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Light,
    Dark,
}

impl Family {
    pub fn label(self) -> &'static str {
        match self {
            Family::Light => "Light",
            Family::Dark => "Dark",
        }
    }

    /// Map the user's choice to the concrete factory
    pub fn factory(self) -> Box<dyn WidgetFactory> {
        match self {
            Family::Light => Box::new(LightFactory),
            Family::Dark => Box::new(DarkFactory),
        }
    }
}

pub trait Button {
    fn family(&self) -> Family;
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn family(&self) -> Family;
    fn render(&self) -> String;
}

pub struct LightButton;
pub struct DarkButton;
pub struct LightCheckbox;
pub struct DarkCheckbox;

impl Button for LightButton {
    fn family(&self) -> Family {
        Family::Light
    }

    fn render(&self) -> String {
        "LightButton: white background, dark text".to_string()
    }
}

impl Button for DarkButton {
    fn family(&self) -> Family {
        Family::Dark
    }

    fn render(&self) -> String {
        "DarkButton: charcoal background, light text".to_string()
    }
}

impl Checkbox for LightCheckbox {
    fn family(&self) -> Family {
        Family::Light
    }

    fn render(&self) -> String {
        "LightCheckbox: grey border, blue tick".to_string()
    }
}

impl Checkbox for DarkCheckbox {
    fn family(&self) -> Family {
        Family::Dark
    }

    fn render(&self) -> String {
        "DarkCheckbox: neon border, green tick".to_string()
    }
}

/// Creates one matching product of each kind
pub trait WidgetFactory {
    fn family(&self) -> Family;
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct LightFactory;

impl WidgetFactory for LightFactory {
    fn family(&self) -> Family {
        Family::Light
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(LightCheckbox)
    }
}

pub struct DarkFactory;

impl WidgetFactory for DarkFactory {
    fn family(&self) -> Family {
        Family::Dark
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(DarkCheckbox)
    }
}

fn render_form(button: &dyn Button, checkbox: &dyn Checkbox, out: &mut Transcript) {
    out.step(button.render());
    out.step(checkbox.render());
}

pub struct AbstractFactoryDemo;

impl AbstractFactoryDemo {
    fn build(&self, family: Family) -> Transcript {
        let mut t = Transcript::new();
        let factory = family.factory();
        t.info(format!("Using {}Factory", factory.family().label()));
        let button = factory.create_button();
        let checkbox = factory.create_checkbox();
        render_form(button.as_ref(), checkbox.as_ref(), &mut t);
        t.result(format!(
            "Both widgets belong to the {} family",
            factory.family().label()
        ));
        t
    }
}

impl PatternDemo for AbstractFactoryDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::AbstractFactory
    }

    fn scenarios(&self) -> &'static [ScenarioSpec] {
        SCENARIOS
    }

    fn run(&mut self, id: &str) -> Option<Transcript> {
        match find_scenario(SCENARIOS, id)?.id {
            "light" => Some(self.build(Family::Light)),
            "dark" => Some(self.build(Family::Dark)),
            _ => None,
        }
    }

    fn comparison(&self) -> Comparison {
        let good = self.build(Family::Dark);

        // Constructing concrete types directly: nothing stops mixing families.
        let mut bad = Transcript::new();
        bad.info("Client constructs widgets directly");
        let button = LightButton;
        let checkbox = DarkCheckbox;
        render_form(&button, &checkbox, &mut bad);
        bad.warning(format!(
            "Mixed families: {} button with a {} checkbox",
            button.family().label(),
            checkbox.family().label()
        ));

        Comparison {
            good,
            bad,
            note: "A concrete factory only produces members of its own family, so a form can \
                   never end up half light and half dark.",
        }
    }
}
