use std::time::{Duration, Instant};

use log::debug;

/// Logs how long a labelled phase took when dropped.
pub struct ScopeTimer {
    label: &'static str,
    start: Instant,
}

impl ScopeTimer {
    pub fn new(label: &'static str) -> Self {
        ScopeTimer {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopeTimer {
    fn drop(&mut self) {
        debug!("{} took {:.3?}", self.label, self.start.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = ScopeTimer::new("test");
        let first = timer.elapsed();
        let second = timer.elapsed();
        assert!(second >= first);
    }
}
