use chrono::NaiveDate;

/// The check-in/check-out pair picked on the calendar.
///
/// The state machine in [`Selection::select`] only ever produces ranges with
/// `start <= end`. A `Range` built by hand may break that, which is why
/// quoting checks the order again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    StartOnly(NaiveDate),
    Range { start: NaiveDate, end: NaiveDate },
}

impl Selection {
    /// Apply a click on `date`.
    pub fn select(self, date: NaiveDate) -> Self {
        match self {
            Selection::Empty | Selection::Range { .. } => Selection::StartOnly(date),
            Selection::StartOnly(start) if date < start => Selection::Range {
                start: date,
                end: start,
            },
            Selection::StartOnly(start) if date == start => Selection::StartOnly(date),
            Selection::StartOnly(start) => Selection::Range { start, end: date },
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            Selection::Empty => None,
            Selection::StartOnly(start) | Selection::Range { start, .. } => Some(start),
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            Selection::Range { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        self.start() == Some(date) || self.end() == Some(date)
    }

    /// Strictly between both ends; endpoints are not in range.
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        match *self {
            Selection::Range { start, end } => date > start && date < end,
            _ => false,
        }
    }

    /// Values mirrored into the form's check-in and check-out fields.
    pub fn form_fields(&self) -> (String, String) {
        let field = |date: Option<NaiveDate>| {
            date.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        (field(self.start()), field(self.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn first_click_starts_selection() {
        let selection = Selection::Empty.select(d("2025-11-10"));
        assert_eq!(selection, Selection::StartOnly(d("2025-11-10")));
        assert_eq!(selection.end(), None);
    }

    #[test]
    fn later_click_completes_range() {
        let selection = Selection::StartOnly(d("2025-11-10")).select(d("2025-11-13"));
        assert_eq!(
            selection,
            Selection::Range {
                start: d("2025-11-10"),
                end: d("2025-11-13")
            }
        );
    }

    #[test]
    fn earlier_click_swaps_into_range() {
        let selection = Selection::StartOnly(d("2025-11-10")).select(d("2025-11-03"));
        assert_eq!(selection.start(), Some(d("2025-11-03")));
        assert_eq!(selection.end(), Some(d("2025-11-10")));
    }

    #[test]
    fn same_day_click_keeps_start_only() {
        let selection = Selection::StartOnly(d("2025-11-10")).select(d("2025-11-10"));
        assert_eq!(selection, Selection::StartOnly(d("2025-11-10")));
    }

    #[test]
    fn click_on_full_range_restarts() {
        let range = Selection::Range {
            start: d("2025-11-10"),
            end: d("2025-11-13"),
        };
        assert_eq!(
            range.select(d("2025-11-12")),
            Selection::StartOnly(d("2025-11-12"))
        );
        assert_eq!(
            range.select(d("2025-12-01")),
            Selection::StartOnly(d("2025-12-01"))
        );
    }

    #[test]
    fn transitions_never_produce_reversed_range() {
        let clicks = [
            "2025-11-20", "2025-11-02", "2025-11-15", "2025-11-15", "2025-11-01", "2025-12-31",
            "2025-01-01", "2025-06-06",
        ];
        let mut selection = Selection::Empty;
        for click in clicks {
            selection = selection.select(d(click));
            if let (Some(start), Some(end)) = (selection.start(), selection.end()) {
                assert!(start <= end, "{start} > {end}");
            }
        }
    }

    #[test]
    fn in_range_excludes_endpoints() {
        let range = Selection::Range {
            start: d("2025-11-10"),
            end: d("2025-11-13"),
        };
        assert!(!range.is_in_range(d("2025-11-10")));
        assert!(range.is_in_range(d("2025-11-11")));
        assert!(range.is_in_range(d("2025-11-12")));
        assert!(!range.is_in_range(d("2025-11-13")));
        assert!(range.is_endpoint(d("2025-11-13")));
        assert!(!Selection::StartOnly(d("2025-11-10")).is_in_range(d("2025-11-11")));
    }

    #[test]
    fn form_fields_mirror_selection() {
        assert_eq!(Selection::Empty.form_fields(), (String::new(), String::new()));
        assert_eq!(
            Selection::StartOnly(d("2025-11-10")).form_fields(),
            ("2025-11-10".to_string(), String::new())
        );
        let range = Selection::StartOnly(d("2025-11-10")).select(d("2025-11-13"));
        assert_eq!(
            range.form_fields(),
            ("2025-11-10".to_string(), "2025-11-13".to_string())
        );
    }
}
