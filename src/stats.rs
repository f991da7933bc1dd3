//! Performance statistics collection for `--stats` output.

use std::time::{Duration, Instant};

/// Collects per-phase timings.
///
/// Created when `--stats` is passed. Each solve is recorded as a phase under
/// its method label; `display` prints the table to stderr.
pub struct Stats {
    total_start: Instant,
    phases: Vec<(&'static str, Duration)>,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    pub fn new() -> Self {
        Self {
            total_start: Instant::now(),
            phases: Vec::new(),
        }
    }

    /// Record a completed phase with its duration.
    pub fn add_phase(&mut self, name: &'static str, duration: Duration) {
        self.phases.push((name, duration));
    }

    /// Print the stats table to stderr.
    pub fn display(&self) {
        let total = self.total_start.elapsed();
        eprintln!();
        eprintln!("=== Sextant Performance Stats ===");
        for (name, dur) in &self.phases {
            eprintln!("  {:<24} {:>10.6}s", name, dur.as_secs_f64());
        }
        eprintln!("  ─────────────────────────────────");
        eprintln!("  Total:                  {:>10.6}s", total.as_secs_f64());
    }
}
