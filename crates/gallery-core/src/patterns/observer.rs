//! Observer: a weather station pushing readings to its displays
//!
//! Notification is synchronous and unconditional: every subscriber sees every
//! change, in the order it subscribed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{find_scenario, PatternDemo, PatternKind, ScenarioSpec};
use crate::transcript::{Comparison, Transcript};

const SCENARIOS: &[ScenarioSpec] = &[ScenarioSpec {
    id: "change",
    label: "New reading",
    key: 'a',
}];

/// Range of the random readings, in degrees Celsius
const TEMPERATURE_RANGE: std::ops::Range<f64> = 15.0..35.0;

/// Handle returned by [`WeatherStation::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

pub trait WeatherObserver: Send {
    fn name(&self) -> &str;
    /// React to a new temperature; returns the line the observer reports
    fn update(&mut self, temperature: f64) -> String;
}

/// One delivered notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub observer: ObserverId,
    pub name: String,
    pub message: String,
}

/// Subject
#[derive(Default)]
pub struct WeatherStation {
    temperature: f64,
    observers: Vec<(ObserverId, Box<dyn WeatherObserver>)>,
    next_id: u32,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn WeatherObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove a subscriber; false if it was not subscribed
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Store the reading and notify every subscriber in registration order
    pub fn set_temperature(&mut self, temperature: f64) -> Vec<Notification> {
        self.temperature = temperature;
        self.notify()
    }

    fn notify(&mut self) -> Vec<Notification> {
        let temperature = self.temperature;
        self.observers
            .iter_mut()
            .map(|(id, observer)| Notification {
                observer: *id,
                name: observer.name().to_string(),
                message: observer.update(temperature),
            })
            .collect()
    }
}

pub struct PhoneDisplay;

impl WeatherObserver for PhoneDisplay {
    fn name(&self) -> &str {
        "PhoneDisplay"
    }

    fn update(&mut self, temperature: f64) -> String {
        format!("Push notification: it is now {temperature:.1}°C")
    }
}

pub struct LobbyDisplay;

impl WeatherObserver for LobbyDisplay {
    fn name(&self) -> &str {
        "LobbyDisplay"
    }

    fn update(&mut self, temperature: f64) -> String {
        let mood = if temperature >= 28.0 {
            "hot"
        } else if temperature <= 18.0 {
            "cool"
        } else {
            "mild"
        };
        format!("Screen shows {temperature:.1}°C ({mood})")
    }
}

/// Keeps every reading to report a running average
#[derive(Default)]
pub struct StatisticsLog {
    readings: Vec<f64>,
}

impl WeatherObserver for StatisticsLog {
    fn name(&self) -> &str {
        "StatisticsLog"
    }

    fn update(&mut self, temperature: f64) -> String {
        self.readings.push(temperature);
        let avg = self.readings.iter().sum::<f64>() / self.readings.len() as f64;
        format!(
            "Recorded reading #{} (average {avg:.1}°C)",
            self.readings.len()
        )
    }
}

fn standard_station() -> WeatherStation {
    let mut station = WeatherStation::new();
    station.subscribe(Box::new(PhoneDisplay));
    station.subscribe(Box::new(LobbyDisplay));
    station.subscribe(Box::<StatisticsLog>::default());
    station
}

fn write_notifications(notifications: &[Notification], out: &mut Transcript) {
    for n in notifications {
        out.step(format!("[{}] {}", n.name, n.message));
    }
    out.result(format!("{} observers notified", notifications.len()));
}

pub struct ObserverDemo {
    station: WeatherStation,
    rng: StdRng,
}

impl ObserverDemo {
    /// Subject plus its three observers, set up once when the panel mounts
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible readings
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            station: standard_station(),
            rng,
        }
    }

    pub fn station(&self) -> &WeatherStation {
        &self.station
    }

    pub fn station_mut(&mut self) -> &mut WeatherStation {
        &mut self.station
    }

    fn next_reading(&mut self) -> f64 {
        let raw: f64 = self.rng.gen_range(TEMPERATURE_RANGE);
        (raw * 10.0).round() / 10.0
    }

    fn change(&mut self) -> Transcript {
        let mut t = Transcript::new();
        let temperature = self.next_reading();
        t.info(format!("WeatherStation: temperature set to {temperature:.1}°C"));
        let notifications = self.station.set_temperature(temperature);
        write_notifications(&notifications, &mut t);
        t
    }
}

impl Default for ObserverDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternDemo for ObserverDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Observer
    }

    fn scenarios(&self) -> &'static [ScenarioSpec] {
        SCENARIOS
    }

    fn run(&mut self, id: &str) -> Option<Transcript> {
        match find_scenario(SCENARIOS, id)?.id {
            "change" => Some(self.change()),
            _ => None,
        }
    }

    fn comparison(&self) -> Comparison {
        let temperature = 24.0;

        let mut good = Transcript::new();
        let mut station = standard_station();
        good.info(format!("Station publishes {temperature:.1}°C"));
        let notifications = station.set_temperature(temperature);
        write_notifications(&notifications, &mut good);
        good.highlight("A new display just subscribes; the station never changes");

        let mut bad = Transcript::new();
        bad.info(format!("Station stores {temperature:.1}°C and says nothing"));
        for name in ["PhoneDisplay", "LobbyDisplay", "StatisticsLog"] {
            bad.step(format!("[{name}] polls station.temperature() ... unchanged? poll again"));
        }
        bad.warning("Displays poll on a timer: wasted work and stale readings between polls");

        Comparison {
            good,
            bad,
            note: "Observers are pushed each change exactly once. Without the pattern, every \
                   display must poll or the station must hard-code its dependents.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        name: String,
    }

    impl WeatherObserver for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn update(&mut self, temperature: f64) -> String {
            format!("{} saw {temperature}", self.name)
        }
    }

    fn recorder(name: &str) -> Box<dyn WeatherObserver> {
        Box::new(Recorder {
            name: name.to_string(),
        })
    }

    #[test]
    fn test_fan_out_in_registration_order() {
        for m in 0..6 {
            let mut station = WeatherStation::new();
            let ids: Vec<ObserverId> = (0..m)
                .map(|i| station.subscribe(recorder(&format!("obs{i}"))))
                .collect();

            let notifications = station.set_temperature(21.5);

            assert_eq!(notifications.len(), m);
            let delivered: Vec<ObserverId> = notifications.iter().map(|n| n.observer).collect();
            assert_eq!(delivered, ids);
        }
    }

    #[test]
    fn test_no_observers_is_not_an_error() {
        let mut station = WeatherStation::new();
        assert!(station.set_temperature(30.0).is_empty());
        assert_eq!(station.temperature(), 30.0);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_observer() {
        let mut station = WeatherStation::new();
        let a = station.subscribe(recorder("a"));
        let b = station.subscribe(recorder("b"));
        let c = station.subscribe(recorder("c"));

        assert!(station.unsubscribe(b));
        let names: Vec<String> = station
            .set_temperature(20.0)
            .into_iter()
            .map(|n| n.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);

        assert!(!station.unsubscribe(b), "second unsubscribe is a no-op");
        assert!(station.unsubscribe(a));
        assert!(station.unsubscribe(c));
        assert_eq!(station.observer_count(), 0);
    }

    #[test]
    fn test_ids_are_not_reused_after_unsubscribe() {
        let mut station = WeatherStation::new();
        let a = station.subscribe(recorder("a"));
        station.unsubscribe(a);
        let b = station.subscribe(recorder("b"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_change_scenario_notifies_three_displays() {
        let mut demo = ObserverDemo::with_seed(42);
        let t = demo.run("change").unwrap();
        let texts: Vec<&str> = t.texts().collect();
        assert!(texts[1].starts_with("[PhoneDisplay]"));
        assert!(texts[2].starts_with("[LobbyDisplay]"));
        assert!(texts[3].starts_with("[StatisticsLog]"));
        assert_eq!(texts[4], "3 observers notified");
    }

    #[test]
    fn test_readings_stay_in_range_and_are_seeded() {
        let mut a = ObserverDemo::with_seed(9);
        let mut b = ObserverDemo::with_seed(9);
        for _ in 0..20 {
            let ta = a.run("change").unwrap();
            let tb = b.run("change").unwrap();
            assert_eq!(ta, tb);
            let temp = a.station().temperature();
            assert!((15.0..=35.0).contains(&temp));
        }
    }

    #[test]
    fn test_statistics_log_accumulates_across_changes() {
        let mut demo = ObserverDemo::with_seed(1);
        demo.run("change");
        let t = demo.run("change").unwrap();
        assert!(t.contains("Recorded reading #2"));
    }

    #[test]
    fn test_demo_station_supports_unsubscribe() {
        let mut demo = ObserverDemo::with_seed(3);
        let extra = demo.station_mut().subscribe(recorder("extra"));
        assert_eq!(demo.station().observer_count(), 4);
        assert!(demo.station_mut().unsubscribe(extra));
        let t = demo.run("change").unwrap();
        assert!(t.contains("3 observers notified"));
    }
}
