//! Named monotonic sequences
//!
//! Hands out sequential numbers keyed by name, e.g. `quote_number`.
//! The production counter lives in the data layer; this in-process
//! version backs the in-memory provider and tests.

use std::collections::HashMap;
use std::sync::Mutex;

/// Thread-safe named sequence generator. Each name starts at 1.
#[derive(Debug, Default)]
pub struct Counter {
    sequences: Mutex<HashMap<String, u32>>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next value for the named sequence (1, 2, 3, ...)
    pub fn next(&self, name: &str) -> u32 {
        let mut sequences = self.sequences.lock().unwrap_or_else(|e| e.into_inner());
        let seq = sequences.entry(name.to_string()).or_insert(0);
        *seq += 1;
        *seq
    }

    /// Last value handed out for the named sequence, 0 if none
    pub fn current(&self, name: &str) -> u32 {
        let sequences = self.sequences.lock().unwrap_or_else(|e| e.into_inner());
        sequences.get(name).copied().unwrap_or(0)
    }
}
