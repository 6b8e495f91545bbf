//! Time provider abstraction for testable time-dependent logic

#[cfg(test)]
use std::sync::{Arc, Mutex};
#[cfg(test)]
use std::time::Duration;
use std::time::SystemTime;

/// Abstraction over the wall clock so version stamping is deterministic under test
pub trait TimeProvider: Send + Sync {
    /// Get the current system time (for timestamps)
    fn system_time(&self) -> SystemTime;
}

/// Production time provider using actual system time
#[derive(Default, Clone)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn system_time(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Mock time provider for deterministic testing
#[derive(Clone)]
#[cfg(test)]
pub struct MockTimeProvider {
    current_system_time: Arc<Mutex<SystemTime>>,
}

#[cfg(test)]
impl MockTimeProvider {
    /// Create a new mock time provider starting at the given time
    pub fn new(system_time: SystemTime) -> Self {
        Self {
            current_system_time: Arc::new(Mutex::new(system_time)),
        }
    }

    /// Advance the mock clock by the given duration
    pub fn advance_time(&self, duration: Duration) {
        let mut system_time = self.current_system_time.lock().unwrap();
        *system_time += duration;
    }

    /// Set the current system time (for timestamps)
    pub fn set_system_time(&self, system_time: SystemTime) {
        let mut current = self.current_system_time.lock().unwrap();
        *current = system_time;
    }
}

#[cfg(test)]
impl TimeProvider for MockTimeProvider {
    fn system_time(&self) -> SystemTime {
        *self.current_system_time.lock().unwrap()
    }
}
