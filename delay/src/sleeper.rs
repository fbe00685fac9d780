use std::time::Duration;

/// Performs the wait between validation and completion of an operation.
///
/// [`ThreadSleeper`] blocks the calling thread. Hosts with a cooperative
/// execution model can supply their own implementation that suspends instead.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Converts a host number into a wait in whole milliseconds.
///
/// NaN and negative values clamp to zero, fractions are truncated and
/// anything past `u64::MAX` saturates.
pub fn millis_from_number(value: f64) -> Duration {
    if value.is_nan() {
        return Duration::ZERO;
    }
    Duration::from_millis(value.max(0.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_millis_from_number() {
        assert_eq!(millis_from_number(100.0), Duration::from_millis(100));
        assert_eq!(millis_from_number(2.9), Duration::from_millis(2));
        assert_eq!(millis_from_number(-5.0), Duration::ZERO);
        assert_eq!(millis_from_number(f64::NAN), Duration::ZERO);
        assert_eq!(millis_from_number(f64::INFINITY), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_thread_sleeper_waits() {
        let start = Instant::now();
        ThreadSleeper.sleep(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
