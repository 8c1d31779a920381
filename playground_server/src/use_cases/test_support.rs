use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{Clock, RandomSource, WordMutation, WordStore};
use crate::domain::words::WordRegistry;

// 2024-01-15T12:00:00Z
pub(crate) const FIXED_NOW_MILLIS: i64 = 1_705_320_000_000;

// Shared fixed time source for deterministic use-case tests.
#[derive(Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn new() -> Self {
        Self(DateTime::from_timestamp_millis(FIXED_NOW_MILLIS).expect("valid fixed timestamp"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// Random source that always answers with the same values.
#[derive(Clone, Copy)]
pub(crate) struct FixedRandom {
    pub word: u64,
    pub unit: f64,
    pub index: usize,
}

impl Default for FixedRandom {
    fn default() -> Self {
        Self {
            word: 42,
            unit: 0.5,
            index: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn next_u64(&self) -> u64 {
        self.word
    }

    fn next_unit(&self) -> f64 {
        self.unit
    }

    fn next_index(&self, upper: usize) -> usize {
        self.index % upper
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub add: bool,
    pub remove: bool,
    pub list: bool,
    pub reset: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingWordStore {
    registry: Arc<Mutex<WordRegistry>>,
    failures: FailureFlags,
}

impl RecordingWordStore {
    pub(crate) fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(WordRegistry::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_words(words: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut guard = store.registry.lock().expect("registry mutex poisoned");
            for word in words {
                guard.add(word);
            }
        }
        store
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn words(&self) -> Vec<String> {
        let guard = self.registry.lock().expect("registry mutex poisoned");
        guard.list()
    }
}

#[async_trait]
impl WordStore for RecordingWordStore {
    async fn add(&self, word: &str) -> Result<WordMutation, String> {
        if self.failures.add {
            return Err("add failed".to_string());
        }

        let mut guard = self.registry.lock().expect("registry mutex poisoned");
        let changed = guard.add(word);
        Ok(WordMutation {
            changed,
            words: guard.list(),
        })
    }

    async fn remove(&self, word: &str) -> Result<WordMutation, String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.registry.lock().expect("registry mutex poisoned");
        let changed = guard.remove(word);
        Ok(WordMutation {
            changed,
            words: guard.list(),
        })
    }

    async fn list(&self) -> Result<Vec<String>, String> {
        if self.failures.list {
            return Err("list failed".to_string());
        }

        let guard = self.registry.lock().expect("registry mutex poisoned");
        Ok(guard.list())
    }

    async fn reset(&self) -> Result<usize, String> {
        if self.failures.reset {
            return Err("reset failed".to_string());
        }

        let mut guard = self.registry.lock().expect("registry mutex poisoned");
        Ok(guard.reset())
    }
}
