use chrono::{Datelike, NaiveDate};

/// The calendar page currently on screen. `month` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedPeriod {
    year: i32,
    month: u32,
}

impl DisplayedPeriod {
    /// Build a period, normalizing months outside `0..12` into neighbouring years.
    pub fn new(year: i32, month: i32) -> Self {
        let total = year * 12 + month;
        Self {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u32,
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0() as i32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn prev(&self) -> Self {
        Self::new(self.year, self.month as i32 - 1)
    }

    pub fn next(&self) -> Self {
        Self::new(self.year, self.month as i32 + 1)
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).expect("Invalid year/month")
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next()
            .first_day()
            .pred_opt()
            .expect("Invalid month end calculation")
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Blank cells before the 1st in a Sunday-first week.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let start = self.first_day();
        (0..self.days_in_month() as i64).map(move |i| start + chrono::Duration::days(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_from_january_rolls_back_a_year() {
        let january = DisplayedPeriod::new(2026, 0);
        let december = january.prev();
        assert_eq!(december.year(), 2025);
        assert_eq!(december.month(), 11);
    }

    #[test]
    fn next_from_december_rolls_forward_a_year() {
        let next = DisplayedPeriod::new(2025, 11).next();
        assert_eq!((next.year(), next.month()), (2026, 0));
    }

    #[test]
    fn new_normalizes_out_of_range_months() {
        assert_eq!(DisplayedPeriod::new(2025, -1), DisplayedPeriod::new(2024, 11));
        assert_eq!(DisplayedPeriod::new(2025, 12), DisplayedPeriod::new(2026, 0));
        assert_eq!(DisplayedPeriod::new(2025, 25), DisplayedPeriod::new(2027, 1));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(DisplayedPeriod::new(2025, 10).days_in_month(), 30);
        assert_eq!(DisplayedPeriod::new(2024, 1).days_in_month(), 29);
        assert_eq!(DisplayedPeriod::new(2025, 1).days_in_month(), 28);
        assert_eq!(DisplayedPeriod::new(2025, 11).days_in_month(), 31);
    }

    #[test]
    fn leading_blanks_count_from_sunday() {
        // 1 November 2025 is a Saturday, 1 June 2025 a Sunday
        assert_eq!(DisplayedPeriod::new(2025, 10).leading_blanks(), 6);
        assert_eq!(DisplayedPeriod::new(2025, 5).leading_blanks(), 0);
    }

    #[test]
    fn containing_uses_zero_based_month() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
        let period = DisplayedPeriod::containing(date);
        assert_eq!(period.month(), 10);
        assert_eq!(period.days().count(), 30);
        assert_eq!(period.days().last(), Some(period.last_day()));
    }
}
