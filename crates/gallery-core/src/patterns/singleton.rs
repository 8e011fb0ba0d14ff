//! Singleton: one process-wide configuration manager
//!
//! The instance lives in a [`OnceLock`], so construction happens exactly once
//! no matter how many accessors race to it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use chrono::{DateTime, Local};

use super::{find_scenario, PatternDemo, PatternKind, ScenarioSpec};
use crate::transcript::{Comparison, Transcript};

static INSTANCE: OnceLock<ConfigManager> = OnceLock::new();

/// Counts every construction, singleton or not
static CONSTRUCTIONS: AtomicU64 = AtomicU64::new(0);

const SCENARIOS: &[ScenarioSpec] = &[ScenarioSpec {
    id: "access",
    label: "Get instance twice",
    key: 'a',
}];

/// Shared application settings
#[derive(Debug)]
pub struct ConfigManager {
    serial: u64,
    created_at: DateTime<Local>,
    theme: &'static str,
    language: &'static str,
}

impl ConfigManager {
    fn new() -> Self {
        let serial = CONSTRUCTIONS.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!("ConfigManager #{serial} constructed");
        Self {
            serial,
            created_at: Local::now(),
            theme: "dark",
            language: "en",
        }
    }

    /// The single shared instance
    pub fn instance() -> &'static ConfigManager {
        INSTANCE.get_or_init(ConfigManager::new)
    }

    /// Construction order across the whole process (1-based)
    pub fn serial(&self) -> u64 {
        self.serial
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn theme(&self) -> &'static str {
        self.theme
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    fn describe(&self) -> String {
        format!(
            "instance #{} created at {}",
            self.serial,
            self.created_at.format("%H:%M:%S%.3f")
        )
    }
}

pub struct SingletonDemo;

impl SingletonDemo {
    fn access(&self) -> Transcript {
        let mut t = Transcript::new();
        let first = ConfigManager::instance();
        t.step(format!("config1 = ConfigManager::instance() -> {}", first.describe()));
        let second = ConfigManager::instance();
        t.step(format!("config2 = ConfigManager::instance() -> {}", second.describe()));
        t.result(format!(
            "config1 and config2 are the same instance: {}",
            std::ptr::eq(first, second)
        ));
        t.info(format!(
            "Shared settings: theme={}, language={}",
            first.theme(),
            first.language()
        ));
        t
    }
}

impl PatternDemo for SingletonDemo {
    fn kind(&self) -> PatternKind {
        PatternKind::Singleton
    }

    fn scenarios(&self) -> &'static [ScenarioSpec] {
        SCENARIOS
    }

    fn run(&mut self, id: &str) -> Option<Transcript> {
        match find_scenario(SCENARIOS, id)?.id {
            "access" => Some(self.access()),
            _ => None,
        }
    }

    fn comparison(&self) -> Comparison {
        let good = self.access();

        let mut bad = Transcript::new();
        let first = ConfigManager::new();
        bad.step(format!("config1 = ConfigManager::new() -> {}", first.describe()));
        let second = ConfigManager::new();
        bad.step(format!("config2 = ConfigManager::new() -> {}", second.describe()));
        bad.warning(format!(
            "config1 and config2 are the same instance: {}",
            std::ptr::eq(&first, &second)
        ));
        bad.warning("Each caller holds its own copy; a change in one is invisible to the other");

        Comparison {
            good,
            bad,
            note: "With a singleton every caller shares one configuration. Constructing it \
                   ad hoc creates independent copies that silently drift apart.",
        }
    }
}
