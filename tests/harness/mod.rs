#![allow(dead_code)]

pub mod recording_messenger;
pub mod scripted_backend;

use std::sync::{Arc, Mutex};

/// Ordered log of calls shared between fakes, for sequencing assertions.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.entries
            .lock()
            .expect("lock call log")
            .push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().expect("lock call log").clone()
    }

    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries().iter().position(|e| e == entry)
    }

    pub fn count(&self, entry: &str) -> usize {
        self.entries().iter().filter(|e| *e == entry).count()
    }
}
