use super::theme::Theme;
use crate::domain::{BookingSummary, CalendarView, DayCell, GridCell, Locale};
use std::fmt::Write;

/// Plain-text rendering for non-interactive commands.
pub struct TuiRenderer<'a> {
    locale: &'a dyn Locale,
    theme: Option<Theme>,
}

impl<'a> TuiRenderer<'a> {
    pub fn new(locale: &'a dyn Locale) -> Self {
        Self {
            locale,
            theme: None,
        }
    }

    /// Colorize output with `theme` (only meaningful on a terminal).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    fn cell_text(cell: &DayCell) -> String {
        let day = cell.day();
        if cell.unavailable {
            format!("({:>2})", day)
        } else if cell.selected {
            format!("[{:>2}]", day)
        } else if cell.in_range {
            format!("-{:>2}-", day)
        } else {
            format!(" {:>2} ", day)
        }
    }

    fn paint(&self, cell: &DayCell, text: &str) -> String {
        let Some(theme) = &self.theme else {
            return text.to_string();
        };
        let pair = if cell.unavailable {
            &theme.colors.unavailable
        } else if cell.selected {
            &theme.colors.selected
        } else if cell.in_range {
            &theme.colors.in_range
        } else {
            &theme.colors.day
        };
        pair.colorize(text)
    }

    pub fn render_calendar(&self, view: &CalendarView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "<  {}  >", self.locale.month_title(view.period));

        let header: Vec<String> = self
            .locale
            .weekday_labels()
            .iter()
            .map(|label| format!("{:^4}", label))
            .collect();
        let _ = writeln!(out, "{}", header.join(" "));

        for week in view.weeks() {
            let row: Vec<String> = week
                .iter()
                .map(|cell| match cell {
                    GridCell::Blank => "    ".to_string(),
                    GridCell::Day(day) => self.paint(day, &Self::cell_text(day)),
                })
                .collect();
            let _ = writeln!(out, "{}", row.join(" ").trim_end());
        }

        out.push_str("[dd] selected  -dd- in range  (dd) unavailable\n");
        out
    }

    pub fn render_summary(&self, summary: &BookingSummary) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ===", self.locale.summary_heading());
        for line in self.locale.summary_lines(summary) {
            let _ = writeln!(out, "{}", line);
        }
        out
    }
}
