use crate::artifacts::history::date_range::DateRange;
use crate::artifacts::history::timestamp::CommitTimestamp;
use derive_new::new;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws commit timestamps uniformly from a date range
///
/// The day is picked by its integer offset into the range and the time of day
/// is picked field by field. Consecutive samples are independent, so repeated
/// or out-of-order timestamps are expected.
#[derive(Debug, new)]
pub struct TimestampSampler<R: Rng> {
    rng: R,
}

impl TimestampSampler<StdRng> {
    /// Seeded samplers replay the same sequence; unseeded ones draw from the OS.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        TimestampSampler::new(rng)
    }
}

impl<R: Rng> TimestampSampler<R> {
    pub fn sample_offset(&mut self, range: &DateRange) -> u64 {
        self.rng.random_range(0..range.day_count())
    }

    /// Hour, minute and second, each uniform over its whole domain
    pub fn sample_time(&mut self) -> (u32, u32, u32) {
        let hour = self.rng.random_range(0..=23);
        let minute = self.rng.random_range(0..=59);
        let second = self.rng.random_range(0..=59);

        (hour, minute, second)
    }

    pub fn sample(&mut self, range: &DateRange) -> anyhow::Result<CommitTimestamp> {
        let day = range.nth_day(self.sample_offset(range))?;
        let (hour, minute, second) = self.sample_time();

        CommitTimestamp::from_parts(day, hour, minute, second)
    }
}
