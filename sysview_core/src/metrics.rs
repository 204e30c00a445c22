//! Rolling statistics and counter rates

use std::collections::VecDeque;
use std::time::Instant;

/// Rolling average calculator
#[derive(Debug, Clone)]
pub struct RollingAverage {
    values: VecDeque<f64>,
    capacity: usize,
    sum: f64,
}

impl RollingAverage {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
            sum: 0.0,
        }
    }

    pub fn add(&mut self, value: f64) {
        if self.values.len() >= self.capacity {
            if let Some(old_value) = self.values.pop_front() {
                self.sum -= old_value;
            }
        }

        self.values.push_back(value);
        self.sum += value;
    }

    pub fn average(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.sum / self.values.len() as f64
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Per-second rates of a pair of monotonically increasing counters
#[derive(Debug, Clone)]
pub struct RateMeter {
    previous: (u64, u64),
    last_sample: Instant,
}

impl RateMeter {
    pub fn new(initial: (u64, u64), now: Instant) -> Self {
        Self {
            previous: initial,
            last_sample: now,
        }
    }

    /// Record a new reading and return the rates since the previous one.
    /// A counter that went backwards (interface reset) counts as zero.
    pub fn sample(&mut self, current: (u64, u64), now: Instant) -> (f64, f64) {
        let elapsed = now.saturating_duration_since(self.last_sample).as_secs_f64();

        let rates = if elapsed > 0.0 {
            (
                current.0.saturating_sub(self.previous.0) as f64 / elapsed,
                current.1.saturating_sub(self.previous.1) as f64 / elapsed,
            )
        } else {
            (0.0, 0.0)
        };

        self.previous = current;
        self.last_sample = now;
        rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_rate_meter() {
        let start = Instant::now();
        let mut meter = RateMeter::new((1000, 2000), start);

        let (up, down) = meter.sample((3000, 2500), start + Duration::from_secs(2));
        assert_eq!(up, 1000.0);
        assert_eq!(down, 250.0);
    }

    #[test]
    fn test_rate_meter_zero_elapsed_and_reset() {
        let start = Instant::now();
        let mut meter = RateMeter::new((1000, 1000), start);

        assert_eq!(meter.sample((5000, 5000), start), (0.0, 0.0));

        // 计数器回绕后不应出现负速率
        let later = start + Duration::from_secs(1);
        assert_eq!(meter.sample((10, 20), later), (0.0, 0.0));
    }

    #[test]
    fn test_zero_capacity_is_usable() {
        let mut avg = RollingAverage::new(0);
        avg.add(4.0);
        avg.add(6.0);
        assert_eq!(avg.len(), 1);
        assert_eq!(avg.average(), 6.0);
    }
}
