//! Visitor: operations over a fixed collection of shapes
//!
//! The element enum performs the dispatch: [`Shape::accept`] matches on its own
//! variant and calls the visitor's type-specific method.

use std::f64::consts::PI;

use super::{find_scenario, PatternDemo, PatternKind, ScenarioSpec};
use crate::transcript::{Comparison, Transcript};

const SCENARIOS: &[ScenarioSpec] = &[
    ScenarioSpec {
        id: "area",
        label: "Area visitor",
        key: 'a',
    },
    ScenarioSpec {
        id: "perimeter",
        label: "Perimeter visitor",
        key: 's',
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
}

impl Shape {
    pub fn accept<V: ShapeVisitor>(&self, visitor: &mut V) -> V::Output {
        match *self {
            Shape::Circle { radius } => visitor.visit_circle(radius),
            Shape::Square { side } => visitor.visit_square(side),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Shape::Circle { radius } => format!("Circle(r={radius})"),
            Shape::Square { side } => format!("Square(s={side})"),
        }
    }
}

/// One operation, with a method per element kind
pub trait ShapeVisitor {
    type Output;

    fn name(&self) -> &'static str;
    fn visit_circle(&mut self, radius: f64) -> Self::Output;
    fn visit_square(&mut self, side: f64) -> Self::Output;
}

#[derive(Default)]
pub struct AreaCalculator;

impl ShapeVisitor for AreaCalculator {
    type Output = f64;

    fn name(&self) -> &'static str {
        "area"
    }

    fn visit_circle(&mut self, radius: f64) -> f64 {
        PI * radius * radius
    }

    fn visit_square(&mut self, side: f64) -> f64 {
        side * side
    }
}

#[derive(Default)]
pub struct PerimeterCalculator;

impl ShapeVisitor for PerimeterCalculator {
    type Output = f64;

    fn name(&self) -> &'static str {
        "perimeter"
    }

    fn visit_circle(&mut self, radius: f64) -> f64 {
        2.0 * PI * radius
    }

    fn visit_square(&mut self, side: f64) -> f64 {
        4.0 * side
    }
}

/// Walk every shape with `visitor`, narrating each result
fn apply<V>(shapes: &[Shape], mut visitor: V, out: &mut Transcript) -> f64
where
    V: ShapeVisitor<Output = f64>,
{
    let name = visitor.name();
    out.info(format!("Applying {name} visitor to {} shapes", shapes.len()));
    let mut total = 0.0;
    for shape in shapes {
        let value = shape.accept(&mut visitor);
        out.step(format!("{} accepts visitor -> {name} = {value:.2}", shape.label()));
        total += value;
    }
    out.result(format!("Total {name} = {total:.2}"));
    total
}

pub struct VisitorDemo {
    shapes: Vec<Shape>,
}

impl VisitorDemo {
    pub fn new() -> Self {
        Self {
            shapes: vec![
                Shape::Circle { radius: 5.0 },
                Shape::Square { side: 4.0 },
                Shape::Circle { radius: 2.0 },
            ],
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Default for VisitorDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternDemo for VisitorDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Visitor
    }

    fn scenarios(&self) -> &'static [ScenarioSpec] {
        SCENARIOS
    }

    fn run(&mut self, id: &str) -> Option<Transcript> {
        let mut t = Transcript::new();
        match find_scenario(SCENARIOS, id)?.id {
            "area" => apply(&self.shapes, AreaCalculator, &mut t),
            "perimeter" => apply(&self.shapes, PerimeterCalculator, &mut t),
            _ => return None,
        };
        Some(t)
    }

    fn comparison(&self) -> Comparison {
        let mut good = Transcript::new();
        apply(&self.shapes, AreaCalculator, &mut good);
        good.highlight("A new operation is one new visitor; Circle and Square stay closed");

        let mut bad = Transcript::new();
        bad.info("Each shape type implements every operation itself");
        bad.step("impl Circle { fn area(), fn perimeter() }");
        bad.step("impl Square { fn area(), fn perimeter() }");
        bad.warning("Adding export_svg() means editing every shape type again");

        Comparison {
            good,
            bad,
            note: "Visitors group one operation across all element kinds, so new operations \
                   never require touching the element types.",
        }
    }
}
