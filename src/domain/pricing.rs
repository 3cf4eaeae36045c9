use crate::domain::Selection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_NIGHTLY_RATE: u64 = 5900;
pub const DEFAULT_DEPOSIT_PERCENT: u32 = 30;
pub const MAX_DEPOSIT_PERCENT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    /// Check-in or check-out missing.
    IncompleteSelection,
    /// Check-out not strictly after check-in.
    InvalidRange,
    /// Nights times the nightly rate does not fit in the amount type.
    AmountOverflow,
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::IncompleteSelection => write!(f, "check-in and check-out must both be selected"),
            BookingError::InvalidRange => write!(f, "check-out must be after check-in"),
            BookingError::AmountOverflow => write!(f, "total price is too large"),
        }
    }
}

impl std::error::Error for BookingError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    /// Copied verbatim from the guests field.
    pub guests: String,
    pub price_per_night: u64,
    pub total: u64,
    pub deposit_percent: u32,
    pub deposit: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub nightly_rate: u64,
    pub deposit_percent: u32,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            nightly_rate: DEFAULT_NIGHTLY_RATE,
            deposit_percent: DEFAULT_DEPOSIT_PERCENT,
        }
    }
}

impl Pricing {
    pub fn new(nightly_rate: u64, deposit_percent: u32) -> Self {
        Self {
            nightly_rate,
            deposit_percent,
        }
    }

    /// Percentage of `total`, rounded half up. Saturates if the percentage
    /// is above 100 and the result no longer fits.
    pub fn deposit_for(&self, total: u64) -> u64 {
        let deposit = (u128::from(total) * u128::from(self.deposit_percent) + 50) / 100;
        u64::try_from(deposit).unwrap_or(u64::MAX)
    }

    pub fn quote(&self, selection: &Selection, guests: &str) -> Result<BookingSummary, BookingError> {
        let (Some(check_in), Some(check_out)) = (selection.start(), selection.end()) else {
            return Err(BookingError::IncompleteSelection);
        };
        if check_out <= check_in {
            return Err(BookingError::InvalidRange);
        }

        let nights = (check_out - check_in).num_days() as u32;
        let total = self
            .nightly_rate
            .checked_mul(u64::from(nights))
            .ok_or(BookingError::AmountOverflow)?;

        Ok(BookingSummary {
            check_in,
            check_out,
            nights,
            guests: guests.to_string(),
            price_per_night: self.nightly_rate,
            total,
            deposit_percent: self.deposit_percent,
            deposit: self.deposit_for(total),
        })
    }
}
