//! Process-wide move request counter.
//!
//! Starts at zero and only ever goes up by one atomic step per request.

use std::sync::atomic::{AtomicU64, Ordering};

static REQUESTS: AtomicU64 = AtomicU64::new(0);

/// Counts one request and returns the new total.
pub fn inc() -> u64 {
    REQUESTS.fetch_add(1, Ordering::SeqCst) + 1
}

pub fn current() -> u64 {
    REQUESTS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inc_is_monotonic() {
        let a = inc();
        let b = inc();
        assert!(b > a);
        assert!(current() >= b);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let before = current();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    for _ in 0..250 {
                        inc();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert!(current() >= before + 1000);
    }
}
