// Ordered, duplicate-free list of words held for the process lifetime.
#[derive(Debug, Default, Clone)]
pub struct WordRegistry {
    words: Vec<String>,
}

impl WordRegistry {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    // Append the trimmed word unless it is blank or already present.
    pub fn add(&mut self, word: &str) -> bool {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return false;
        }

        // Linear scan keeps insertion order as the only index.
        if self.words.iter().any(|existing| existing == trimmed) {
            return false;
        }

        self.words.push(trimmed.to_string());
        true
    }

    // Remove the first exact match; the input is not trimmed.
    pub fn remove(&mut self, word: &str) -> bool {
        match self.words.iter().position(|existing| existing == word) {
            Some(index) => {
                self.words.remove(index);
                true
            }
            None => false,
        }
    }

    // Snapshot copy in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.words.clone()
    }

    pub fn count(&self) -> usize {
        self.words.len()
    }

    // Clear every entry and report how many were dropped.
    pub fn reset(&mut self) -> usize {
        let previous = self.words.len();
        self.words.clear();
        previous
    }
}
