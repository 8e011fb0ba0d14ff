//! Static source listings shown in the code pane, one per pattern

use crate::patterns::PatternKind;

pub fn snippet_for(kind: PatternKind) -> &'static str {
    match kind {
        PatternKind::Singleton => SINGLETON,
        PatternKind::FactoryMethod => FACTORY_METHOD,
        PatternKind::AbstractFactory => ABSTRACT_FACTORY,
        PatternKind::Adapter => ADAPTER,
        PatternKind::Decorator => DECORATOR,
        PatternKind::Proxy => PROXY,
        PatternKind::Observer => OBSERVER,
        PatternKind::Visitor => VISITOR,
        PatternKind::State => STATE,
    }
}

const SINGLETON: &str = r#"use std::sync::OnceLock;

pub struct ConfigManager {
    pub theme: String,
    pub language: String,
}

static INSTANCE: OnceLock<ConfigManager> = OnceLock::new();

impl ConfigManager {
    pub fn instance() -> &'static ConfigManager {
        INSTANCE.get_or_init(|| ConfigManager {
            theme: "dark".into(),
            language: "en".into(),
        })
    }
}

let a = ConfigManager::instance();
let b = ConfigManager::instance();
assert!(std::ptr::eq(a, b));"#;

const FACTORY_METHOD: &str = r#"pub trait Transport {
    fn deliver(&self) -> String;
}

pub trait Logistics {
    /// The factory method
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self) -> String {
        self.create_transport().deliver()
    }
}

pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}"#;

const ABSTRACT_FACTORY: &str = r#"pub trait Button { fn render(&self) -> String; }
pub trait Checkbox { fn render(&self) -> String; }

pub trait WidgetFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct DarkFactory;

impl WidgetFactory for DarkFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(DarkCheckbox)
    }
}

fn build_form(factory: &dyn WidgetFactory) {
    // never names a concrete widget
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
}"#;

const ADAPTER: &str = r#"/// What the checkout expects
pub trait PaymentProcessor {
    fn pay(&mut self, amount: f64) -> Receipt;
}

/// Third-party API we cannot change
impl LegacyPaymentGateway {
    pub fn make_payment(&mut self, cents: u64, currency: &str) -> LegacyReply;
}

pub struct PaymentAdapter {
    gateway: LegacyPaymentGateway,
}

impl PaymentProcessor for PaymentAdapter {
    fn pay(&mut self, amount: f64) -> Receipt {
        let cents = (amount * 100.0).round() as u64;
        let reply = self.gateway.make_payment(cents, "USD");
        Receipt {
            ok: reply.status_code == 200,
            id: reply.txn,
        }
    }
}"#;

const DECORATOR: &str = r#"pub trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> u32;
}

pub struct Milk {
    inner: Box<dyn Beverage>,
}

impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + 500
    }
}

let mut drink: Box<dyn Beverage> = Box::new(Americano);
drink = Box::new(Milk { inner: drink });
drink = Box::new(ExtraShot { inner: drink });
// "Americano, Milk, Extra Shot" = 4,200"#;

const PROXY: &str = r#"pub struct ImageProxy {
    filename: String,
    real: Option<RealImage>,
}

impl Image for ImageProxy {
    fn display(&mut self) {
        let real = self
            .real
            .get_or_insert_with(|| RealImage::load(&self.filename));
        real.display();
    }
}

let mut photo = ImageProxy::new("mountains.jpg"); // nothing loaded
photo.display(); // Loading mountains.jpg from disk...
photo.display(); // cached"#;

const OBSERVER: &str = r#"pub trait WeatherObserver {
    fn update(&mut self, temperature: f64);
}

#[derive(Default)]
pub struct WeatherStation {
    temperature: f64,
    observers: Vec<Box<dyn WeatherObserver>>,
}

impl WeatherStation {
    pub fn subscribe(&mut self, observer: Box<dyn WeatherObserver>) {
        self.observers.push(observer);
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
        for observer in &mut self.observers {
            observer.update(temperature);
        }
    }
}"#;

const VISITOR: &str = r#"pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
}

pub trait ShapeVisitor {
    type Output;
    fn visit_circle(&mut self, radius: f64) -> Self::Output;
    fn visit_square(&mut self, side: f64) -> Self::Output;
}

impl Shape {
    pub fn accept<V: ShapeVisitor>(&self, v: &mut V) -> V::Output {
        match *self {
            Shape::Circle { radius } => v.visit_circle(radius),
            Shape::Square { side } => v.visit_square(side),
        }
    }
}

struct AreaCalculator;

impl ShapeVisitor for AreaCalculator {
    type Output = f64;
    fn visit_circle(&mut self, r: f64) -> f64 { PI * r * r }
    fn visit_square(&mut self, s: f64) -> f64 { s * s }
}"#;

const STATE: &str = r#"pub trait LightState {
    /// Returns the state that follows this one
    fn handle(&self) -> Box<dyn LightState>;
}

struct Red;
struct Green;
struct Yellow;

impl LightState for Red {
    fn handle(&self) -> Box<dyn LightState> {
        println!("STOP");
        Box::new(Green)
    }
}

pub struct TrafficLight {
    state: Box<dyn LightState>,
}

impl TrafficLight {
    pub fn request(&mut self) {
        self.state = self.state.handle();
    }
}"#;
