//! Sequence numbers for in-flight search attempts.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

/// Identity of one `run` invocation. Later attempts compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attempt(u64);

impl Attempt {
    pub fn number(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing attempts; the last one issued supersedes the rest.
#[derive(Debug, Default)]
pub struct AttemptSequence {
    issued: Cell<u64>,
}

impl AttemptSequence {
    pub fn begin(&self) -> Attempt {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Attempt(next)
    }

    pub fn latest(&self) -> Option<Attempt> {
        match self.issued.get() {
            0 => None,
            n => Some(Attempt(n)),
        }
    }

    pub fn is_latest(&self, attempt: Attempt) -> bool {
        self.latest() == Some(attempt)
    }
}

/// Attempts superseded per key (one key per park), drawn from one sequence.
#[derive(Debug, Default)]
pub struct KeyedAttempts {
    sequence: AttemptSequence,
    latest: RefCell<HashMap<String, Attempt>>,
}

impl KeyedAttempts {
    pub fn begin(&self, key: &str) -> Attempt {
        let attempt = self.sequence.begin();
        self.latest.borrow_mut().insert(key.to_string(), attempt);
        attempt
    }

    pub fn is_latest(&self, key: &str, attempt: Attempt) -> bool {
        self.latest.borrow().get(key) == Some(&attempt)
    }

    /// Latest attempt across all keys.
    pub fn latest(&self) -> Option<Attempt> {
        self.sequence.latest()
    }
}
