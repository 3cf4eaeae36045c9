use crate::domain::{DisplayedPeriod, Selection, UnavailableDates};
use chrono::{Datelike, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub unavailable: bool,
    pub selected: bool,
    pub in_range: bool,
}

impl DayCell {
    /// Unavailable days never get a selection binding.
    pub fn is_clickable(&self) -> bool {
        !self.unavailable
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// One slot of the month grid. Blanks only pad the grid to whole weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Day(cell) => Some(cell),
            GridCell::Blank => None,
        }
    }
}

/// Everything needed to draw one calendar page.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub period: DisplayedPeriod,
    pub cells: Vec<GridCell>,
}

impl CalendarView {
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        self.day_cells().find(|cell| cell.date == date)
    }
}

/// Lay out `period` as a Sunday-first grid tagged against the selection.
pub fn render(
    period: DisplayedPeriod,
    selection: &Selection,
    unavailable: &UnavailableDates,
) -> CalendarView {
    let leading = period.leading_blanks() as usize;
    let mut cells = Vec::with_capacity(6 * DAYS_PER_WEEK);
    cells.extend(std::iter::repeat_n(GridCell::Blank, leading));

    cells.extend(period.days().map(|date| {
        GridCell::Day(DayCell {
            date,
            unavailable: unavailable.contains(date),
            selected: selection.is_endpoint(date),
            in_range: selection.is_in_range(date),
        })
    }));

    let remainder = cells.len() % DAYS_PER_WEEK;
    if remainder != 0 {
        cells.extend(std::iter::repeat_n(
            GridCell::Blank,
            DAYS_PER_WEEK - remainder,
        ));
    }

    CalendarView { period, cells }
}
