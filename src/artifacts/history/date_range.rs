use crate::artifacts::history::error::GenerateError;
use anyhow::Context;
use chrono::{Days, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn try_new(start: NaiveDate, end: NaiveDate) -> anyhow::Result<Self> {
        if start > end {
            return Err(GenerateError::Range {
                start: start.format(DATE_FORMAT).to_string(),
                end: end.format(DATE_FORMAT).to_string(),
            }
            .into());
        }

        Ok(DateRange { start, end })
    }

    /// Parse both ends with `YYYY-MM-DD`, then check their order.
    pub fn try_parse(start: &str, end: &str) -> anyhow::Result<Self> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;

        Self::try_new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, counting both ends
    pub fn day_count(&self) -> u64 {
        // start <= end holds by construction
        (self.end - self.start).num_days() as u64 + 1
    }

    pub fn nth_day(&self, offset: u64) -> anyhow::Result<NaiveDate> {
        if offset >= self.day_count() {
            anyhow::bail!(
                "day offset {} is outside of a {} day range",
                offset,
                self.day_count()
            );
        }

        self.start
            .checked_add_days(Days::new(offset))
            .with_context(|| format!("cannot add {} days to {}", offset, self.start))
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} and {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        GenerateError::Format {
            value: value.to_string(),
        }
        .into()
    })
}
