use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::domain::ports::{Clock, RandomSource, WordMutation, WordStore};
use crate::domain::words::WordRegistry;

// Fixed waits used by the failure endpoints.
#[derive(Debug, Clone, Copy)]
pub struct FailureTimings {
    // Processing time simulated before a POST to the error catalog answers.
    pub post_error_delay: Duration,
    // Wait before the asynchronous fault is raised.
    pub async_fault_delay: Duration,
}

impl Default for FailureTimings {
    fn default() -> Self {
        Self {
            post_error_delay: Duration::from_millis(100),
            async_fault_delay: Duration::from_millis(1000),
        }
    }
}

// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    // The single word list living for the process lifetime.
    pub words: Arc<Mutex<WordRegistry>>,
    pub random: Arc<dyn RandomSource>,
    pub timings: FailureTimings,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(random: Arc<dyn RandomSource>, timings: FailureTimings) -> Self {
        Self {
            words: Arc::new(Mutex::new(WordRegistry::new())),
            random,
            timings,
            started_at: Instant::now(),
        }
    }

    pub fn word_store(&self) -> InMemoryWordStore {
        InMemoryWordStore {
            words: self.words.clone(),
        }
    }
}

// In-memory word store adapter; the mutex serializes every mutation.
#[derive(Clone)]
pub struct InMemoryWordStore {
    pub words: Arc<Mutex<WordRegistry>>,
}

#[async_trait]
impl WordStore for InMemoryWordStore {
    async fn add(&self, word: &str) -> Result<WordMutation, String> {
        let mut words = self.words.lock().await;
        let changed = words.add(word);
        Ok(WordMutation {
            changed,
            words: words.list(),
        })
    }

    async fn remove(&self, word: &str) -> Result<WordMutation, String> {
        let mut words = self.words.lock().await;
        let changed = words.remove(word);
        Ok(WordMutation {
            changed,
            words: words.list(),
        })
    }

    async fn list(&self) -> Result<Vec<String>, String> {
        let words = self.words.lock().await;
        Ok(words.list())
    }

    async fn reset(&self) -> Result<usize, String> {
        let mut words = self.words.lock().await;
        Ok(words.reset())
    }
}

// System clock adapter used by the use cases.
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// Thread-local RNG adapter; unseeded.
#[derive(Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_u64(&self) -> u64 {
        rand::rng().random()
    }

    fn next_unit(&self) -> f64 {
        rand::rng().random()
    }

    fn next_index(&self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}
