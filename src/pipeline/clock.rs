use chrono::{Local, NaiveDate};

/// Reference date for one pipeline run. Captured once per run so every
/// row's duration is computed against the same date; nothing downstream
/// reads the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunClock {
    as_of: NaiveDate,
}

impl RunClock {
    /// Pin the reference date explicitly (tests, `--as-of`, API requests).
    pub fn fixed(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// Capture today's local date.
    pub fn today() -> Self {
        Self {
            as_of: Local::now().date_naive(),
        }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Inclusive day count to `date`: same-day expirations count as 1,
    /// not 0. Past dates go negative and are passed through unmodified.
    pub fn days_until(&self, date: NaiveDate) -> i64 {
        (date - self.as_of).num_days() + 1
    }
}
