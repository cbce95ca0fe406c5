//! Mock status source for testing

use eolwatch_util::{EolError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::StatusSource;

/// Mock status source for unit/integration testing
#[derive(Debug, Clone, Default)]
pub struct MockStatusSource {
    calls: Arc<AtomicUsize>,

    /// Status returned by lookups
    pub eol: Arc<Mutex<bool>>,

    /// Configure lookups to fail
    pub fail_lookup: Arc<Mutex<bool>>,
}

impl MockStatusSource {
    pub fn new(eol: bool) -> Self {
        Self {
            eol: Arc::new(Mutex::new(eol)),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        let source = Self::default();
        *source.fail_lookup.lock().unwrap() = true;
        source
    }

    /// Number of lookups performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StatusSource for MockStatusSource {
    fn eol_status(&self) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.fail_lookup.lock().unwrap() {
            return Err(EolError::http("Mock lookup failure"));
        }

        Ok(*self.eol.lock().unwrap())
    }
}
