use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Dates that cannot be booked, as shipped with the site.
pub const DEFAULT_UNAVAILABLE_DATES: [&str; 3] = ["2025-11-20", "2025-11-22", "2025-12-05"];

/// Read-only set of blocked calendar dates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnavailableDates(BTreeSet<NaiveDate>);

impl UnavailableDates {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self(dates.into_iter().collect())
    }

    /// Parse `YYYY-MM-DD` strings.
    pub fn from_iso<S: AsRef<str>>(dates: impl IntoIterator<Item = S>) -> Result<Self> {
        let parsed = dates
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .with_context(|| format!("Invalid unavailable date: {}", s))
            })
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self(parsed))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }
}
