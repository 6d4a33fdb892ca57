use std::time::{Duration, Instant};

/// Time between throughput reports
const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Counts generations and live cells for throughput reports
#[derive(Debug)]
pub struct SimpleRecord {
    gens: usize,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    pub fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    #[inline]
    pub fn generations(&self) -> usize {
        self.gens
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    pub fn report(&mut self) -> String {
        let elapsed = self.last_report.elapsed().as_secs_f64();
        let gens_per_sec = if elapsed > 0.0 {
            self.gens_in_report as f64 / elapsed
        } else {
            0.0
        };
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_generations() {
        let mut stats = SimpleRecord::new(10);
        stats.record(8);
        stats.record(6);

        assert_eq!(stats.generations(), 2);
        let report = stats.report();
        assert!(report.ends_with("gens:2, alive:6"), "{report}");
    }

    #[test]
    fn report_resets_the_interval() {
        let mut stats = SimpleRecord::new(0);
        stats.report();

        assert!(!stats.has_report());
    }
}
