//! Decorator: a coffee order built from optional wrapping layers
//!
//! Layers are always applied milk -> sugar -> shot, whatever order the user
//! toggled them in. Cost is additive; the description grows in wrap order.

use super::{find_scenario, DemoOption, PatternDemo, PatternKind, ScenarioSpec};
use crate::transcript::{Comparison, Transcript};

const SCENARIOS: &[ScenarioSpec] = &[ScenarioSpec {
    id: "order",
    label: "Place order",
    key: 'a',
}];

pub const BASE_COST: u32 = 3000;
pub const MILK_COST: u32 = 500;
pub const SUGAR_COST: u32 = 300;
pub const SHOT_COST: u32 = 700;

/// Component
pub trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> u32;
}

pub struct Americano;

impl Beverage for Americano {
    fn description(&self) -> String {
        "Americano".to_string()
    }

    fn cost(&self) -> u32 {
        BASE_COST
    }
}

pub struct Milk {
    inner: Box<dyn Beverage>,
}

impl Milk {
    pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Self { inner })
    }
}

impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + MILK_COST
    }
}

pub struct Sugar {
    inner: Box<dyn Beverage>,
}

impl Sugar {
    pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Self { inner })
    }
}

impl Beverage for Sugar {
    fn description(&self) -> String {
        format!("{}, Sugar", self.inner.description())
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + SUGAR_COST
    }
}

pub struct ExtraShot {
    inner: Box<dyn Beverage>,
}

impl ExtraShot {
    pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
        Box::new(Self { inner })
    }
}

impl Beverage for ExtraShot {
    fn description(&self) -> String {
        format!("{}, Extra Shot", self.inner.description())
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + SHOT_COST
    }
}

/// Which optional layers the customer ticked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toppings {
    pub milk: bool,
    pub sugar: bool,
    pub shot: bool,
}

type Wrap = fn(Box<dyn Beverage>) -> Box<dyn Beverage>;

impl Toppings {
    /// Build the drink, narrating each wrap into `out`
    pub fn build(self, out: &mut Transcript) -> Box<dyn Beverage> {
        let mut drink: Box<dyn Beverage> = Box::new(Americano);
        out.info(format!(
            "Base: {} ({})",
            drink.description(),
            format_price(drink.cost())
        ));

        let layers: [(bool, &str, u32, Wrap); 3] = [
            (self.milk, "Milk", MILK_COST, Milk::wrap),
            (self.sugar, "Sugar", SUGAR_COST, Sugar::wrap),
            (self.shot, "Extra Shot", SHOT_COST, ExtraShot::wrap),
        ];
        for (selected, name, surcharge, wrap) in layers {
            if !selected {
                continue;
            }
            drink = wrap(drink);
            out.step(format!(
                "Wrap with {name} (+{}) -> {}",
                format_price(surcharge),
                format_price(drink.cost())
            ));
        }
        drink
    }
}

/// Prices are whole won, shown with a thousands separator
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(" KRW");
    out
}

#[derive(Default)]
pub struct DecoratorDemo {
    toppings: Toppings,
}

impl DecoratorDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toppings(&self) -> Toppings {
        self.toppings
    }

    fn order(&self, toppings: Toppings) -> Transcript {
        let mut t = Transcript::new();
        let drink = toppings.build(&mut t);
        t.result(format!(
            "Order: {} = {}",
            drink.description(),
            format_price(drink.cost())
        ));
        t
    }
}

impl PatternDemo for DecoratorDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Decorator
    }

    fn scenarios(&self) -> &'static [ScenarioSpec] {
        SCENARIOS
    }

    fn run(&mut self, id: &str) -> Option<Transcript> {
        match find_scenario(SCENARIOS, id)?.id {
            "order" => Some(self.order(self.toppings)),
            _ => None,
        }
    }

    fn options(&self) -> Vec<DemoOption> {
        vec![
            DemoOption {
                id: "milk",
                label: "Milk (+500)",
                key: 'm',
                enabled: self.toppings.milk,
            },
            DemoOption {
                id: "sugar",
                label: "Sugar (+300)",
                key: 'u',
                enabled: self.toppings.sugar,
            },
            DemoOption {
                id: "shot",
                label: "Extra shot (+700)",
                key: 't',
                enabled: self.toppings.shot,
            },
        ]
    }

    fn set_option(&mut self, id: &str, enabled: bool) -> bool {
        match id {
            "milk" => self.toppings.milk = enabled,
            "sugar" => self.toppings.sugar = enabled,
            "shot" => self.toppings.shot = enabled,
            _ => return false,
        }
        true
    }

    fn comparison(&self) -> Comparison {
        let good = self.order(Toppings {
            milk: true,
            sugar: false,
            shot: true,
        });

        let mut bad = Transcript::new();
        bad.info("One subclass per combination:");
        for name in [
            "Americano",
            "AmericanoWithMilk",
            "AmericanoWithSugar",
            "AmericanoWithShot",
            "AmericanoWithMilkAndSugar",
            "AmericanoWithMilkAndShot",
            "AmericanoWithSugarAndShot",
            "AmericanoWithMilkSugarAndShot",
        ] {
            bad.step(format!("struct {name}"));
        }
        bad.warning("3 toppings already need 8 types; a 4th doubles it to 16");

        Comparison {
            good,
            bad,
            note: "Decorators compose at runtime: each topping is written once and stacked \
                   as needed instead of enumerating every combination up front.",
        }
    }
}
