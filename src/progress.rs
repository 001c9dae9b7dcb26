use std::time::Instant;

use tracing::info;

const LOG_EVERY: u64 = 1_000_000;

// Per-phase throughput counter. Each loading/translation phase owns one;
// nothing is shared across phases.
pub struct Throughput {
    what: &'static str,
    started: Instant,
    count: u64,
}

impl Throughput {
    pub fn new(what: &'static str) -> Self {
        Self {
            what,
            started: Instant::now(),
            count: 0,
        }
    }

    pub fn tick(&mut self) {
        self.count += 1;
        if self.count % LOG_EVERY == 0 {
            info!(
                "read {} {}, average {} {} per second",
                self.count,
                self.what,
                self.per_second(),
                self.what
            );
        }
    }

    pub fn finish(self) -> u64 {
        info!(
            "read {} {} in {:.2?} ({} {} per second)",
            self.count,
            self.what,
            self.started.elapsed(),
            self.per_second(),
            self.what
        );
        self.count
    }

    fn per_second(&self) -> u64 {
        let elapsed = self.started.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            (self.count as f64 / elapsed) as u64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_returns_tick_count() {
        let mut progress = Throughput::new("items");
        for _ in 0..5 {
            progress.tick();
        }
        assert_eq!(progress.finish(), 5);
    }

    #[test]
    fn fresh_counter_is_zero() {
        assert_eq!(Throughput::new("items").finish(), 0);
    }
}
