use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Issues `deadline<unix-millis>` identifiers.
///
/// Two ids requested within the same millisecond get consecutive values
/// instead of colliding.
#[derive(Debug, Default)]
pub struct DeadlineIdGenerator {
    last: AtomicI64,
}

impl DeadlineIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    fn next_id_at(&self, now_millis: i64) -> String {
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return format!("deadline{candidate}"),
                Err(actual) => previous = actual,
            }
        }
    }
}
