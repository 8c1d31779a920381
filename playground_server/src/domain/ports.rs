use async_trait::async_trait;
use chrono::{DateTime, Utc};

// Result of a word list mutation together with the list as it stood afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMutation {
    pub changed: bool,
    pub words: Vec<String>,
}

// Port for the shared word list used by the word use cases.
// Each call is atomic with respect to other calls on the same store.
#[async_trait]
pub trait WordStore: Send + Sync {
    async fn add(&self, word: &str) -> Result<WordMutation, String>;
    async fn remove(&self, word: &str) -> Result<WordMutation, String>;
    async fn list(&self) -> Result<Vec<String>, String>;
    async fn reset(&self) -> Result<usize, String>;
}

// Port for retrieving the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// Port for the randomness behind request ids, fault selection and mock data.
pub trait RandomSource: Send + Sync {
    fn next_u64(&self) -> u64;

    // Uniform value in [0, 1).
    fn next_unit(&self) -> f64;

    // Uniform index in [0, upper). `upper` must be non-zero.
    fn next_index(&self, upper: usize) -> usize;
}
