use crate::domain::{
    BookingError, BookingSummary, CalendarView, DisplayedPeriod, Pricing, Selection,
    UnavailableDates, render,
};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Free-text fields beside the calendar. Only `guests` reaches the summary;
/// nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub guests: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Guests,
    Name,
    Phone,
    Email,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Guests,
        FormField::Name,
        FormField::Phone,
        FormField::Email,
    ];

    pub fn next(self) -> Option<FormField> {
        let index = Self::ALL.iter().position(|f| *f == self)?;
        Self::ALL.get(index + 1).copied()
    }
}

impl BookingForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Guests => &self.guests,
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Guests => &mut self.guests,
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
        }
    }
}

/// What a confirmation hands off: the computed summary plus contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub summary: BookingSummary,
    pub form: BookingForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected(Selection),
    /// The date is unavailable; the selection was left alone.
    Ignored,
}

/// Calendar and booking form state for one page session.
pub struct BookingWidget {
    period: DisplayedPeriod,
    selection: Selection,
    unavailable: UnavailableDates,
    pricing: Pricing,
    form: BookingForm,
    /// Summary and form as they were at the last successful submit.
    /// Cleared whenever the selection changes.
    submitted: Option<BookingRequest>,
}

impl BookingWidget {
    pub fn new(today: NaiveDate, unavailable: UnavailableDates, pricing: Pricing) -> Self {
        Self {
            period: DisplayedPeriod::containing(today),
            selection: Selection::Empty,
            unavailable,
            pricing,
            form: BookingForm::default(),
            submitted: None,
        }
    }

    pub fn period(&self) -> DisplayedPeriod {
        self.period
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn unavailable(&self) -> &UnavailableDates {
        &self.unavailable
    }

    pub fn pricing(&self) -> Pricing {
        self.pricing
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookingForm {
        &mut self.form
    }

    /// The last successful summary, if the form has been submitted.
    pub fn summary(&self) -> Option<&BookingSummary> {
        self.submitted.as_ref().map(|request| &request.summary)
    }

    pub fn view(&self) -> CalendarView {
        render(self.period, &self.selection, &self.unavailable)
    }

    pub fn show_month(&mut self, period: DisplayedPeriod) {
        self.period = period;
    }

    pub fn show_prev_month(&mut self) {
        self.period = self.period.prev();
    }

    pub fn show_next_month(&mut self) {
        self.period = self.period.next();
    }

    pub fn select_day(&mut self, date: NaiveDate) -> SelectOutcome {
        if self.unavailable.contains(date) {
            debug!("Ignoring click on unavailable date {}", date);
            return SelectOutcome::Ignored;
        }
        self.selection = self.selection.select(date);
        self.submitted = None;
        debug!("Selection is now {:?}", self.selection);
        SelectOutcome::Selected(self.selection)
    }

    /// Install a selection directly, bypassing the click state machine.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.submitted = None;
    }

    /// Check-in and check-out as the form would submit them.
    pub fn form_dates(&self) -> (String, String) {
        self.selection.form_fields()
    }

    /// Validate the selection and compute the summary. Nothing changes on error.
    pub fn submit(&mut self) -> Result<&BookingSummary, BookingError> {
        let summary = self.pricing.quote(&self.selection, &self.form.guests)?;
        info!(
            "Quoted {} nights from {} to {}: total {}, deposit {}",
            summary.nights, summary.check_in, summary.check_out, summary.total, summary.deposit
        );
        let request = self.submitted.insert(BookingRequest {
            summary,
            form: self.form.clone(),
        });
        Ok(&request.summary)
    }

    /// The request to hand to the confirmation destination, once a summary exists.
    pub fn booking_request(&self) -> Option<BookingRequest> {
        self.submitted.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_utils::fixtures::{date, november_widget};

    #[test]
    fn starts_on_month_of_today() {
        let widget = november_widget();
        assert_eq!(widget.period(), DisplayedPeriod::new(2025, 10));
        assert_eq!(widget.selection(), Selection::Empty);
        assert!(widget.summary().is_none());
    }

    #[test]
    fn unavailable_day_never_becomes_endpoint() {
        let mut widget = november_widget();
        assert_eq!(widget.select_day(date("2025-11-20")), SelectOutcome::Ignored);
        assert_eq!(widget.selection(), Selection::Empty);

        widget.select_day(date("2025-11-18"));
        assert_eq!(widget.select_day(date("2025-11-22")), SelectOutcome::Ignored);
        assert_eq!(widget.selection(), Selection::StartOnly(date("2025-11-18")));
    }

    #[test]
    fn click_sequence_builds_range_and_summary() {
        let mut widget = november_widget();
        widget.form_mut().guests = "3".to_string();
        widget.select_day(date("2025-11-13"));
        widget.select_day(date("2025-11-10"));
        assert_eq!(
            widget.form_dates(),
            ("2025-11-10".to_string(), "2025-11-13".to_string())
        );

        let summary = widget.submit().unwrap();
        assert_eq!(summary.nights, 3);
        assert_eq!(summary.total, 17_700);
        assert_eq!(summary.deposit, 5_310);
        assert_eq!(summary.guests, "3");
        assert!(widget.summary().is_some());
    }

    #[test]
    fn failed_submit_leaves_state_alone() {
        let mut widget = november_widget();
        widget.select_day(date("2025-11-10"));
        assert_eq!(widget.submit().unwrap_err(), BookingError::IncompleteSelection);
        assert!(widget.summary().is_none());
        assert_eq!(widget.selection(), Selection::StartOnly(date("2025-11-10")));
    }

    #[test]
    fn reversed_direct_selection_is_rejected() {
        let mut widget = november_widget();
        widget.set_selection(Selection::Range {
            start: date("2025-11-15"),
            end: date("2025-11-14"),
        });
        assert_eq!(widget.submit().unwrap_err(), BookingError::InvalidRange);
        assert!(widget.booking_request().is_none());
    }

    #[test]
    fn navigation_keeps_selection() {
        let mut widget = november_widget();
        widget.select_day(date("2025-11-28"));
        widget.show_next_month();
        widget.select_day(date("2025-12-02"));
        assert_eq!(widget.period(), DisplayedPeriod::new(2025, 11));
        widget.show_next_month();
        assert_eq!(widget.period(), DisplayedPeriod::new(2026, 0));
        widget.show_prev_month();
        widget.show_prev_month();
        assert_eq!(widget.period(), DisplayedPeriod::new(2025, 10));

        let view = widget.view();
        assert!(view.cell_for(date("2025-11-29")).unwrap().in_range);
        assert!(view.cell_for(date("2025-11-28")).unwrap().selected);
    }

    #[test]
    fn form_fields_cycle_in_order() {
        assert_eq!(FormField::Guests.next(), Some(FormField::Name));
        assert_eq!(FormField::Phone.next(), Some(FormField::Email));
        assert_eq!(FormField::Email.next(), None);

        let mut form = BookingForm::default();
        form.field_mut(FormField::Phone).push_str("081");
        assert_eq!(form.phone, "081");
        assert_eq!(form.field(FormField::Phone), "081");
    }

    #[test]
    fn booking_request_carries_contact_details() {
        let mut widget = november_widget();
        widget.form_mut().name = "Somchai".to_string();
        widget.form_mut().email = "somchai@example.com".to_string();
        widget.select_day(date("2025-11-01"));
        widget.select_day(date("2025-11-03"));
        widget.submit().unwrap();

        let request = widget.booking_request().unwrap();
        assert_eq!(request.summary.nights, 2);
        assert_eq!(request.form.name, "Somchai");
    }

    #[test]
    fn new_selection_drops_previous_summary() {
        let mut widget = november_widget();
        widget.form_mut().guests = "3".to_string();
        widget.select_day(date("2025-11-10"));
        widget.select_day(date("2025-11-13"));
        widget.submit().unwrap();

        // edits after submit do not leak into the submitted request
        widget.form_mut().guests = "5".to_string();
        let request = widget.booking_request().unwrap();
        assert_eq!(request.summary.guests, "3");
        assert_eq!(request.form.guests, "3");

        widget.select_day(date("2025-11-01"));
        assert_eq!(widget.form_dates(), ("2025-11-01".to_string(), String::new()));
        assert!(widget.summary().is_none());
        assert!(widget.booking_request().is_none());

        // an ignored click leaves the summary alone
        widget.select_day(date("2025-11-03"));
        widget.submit().unwrap();
        assert_eq!(widget.select_day(date("2025-11-20")), SelectOutcome::Ignored);
        assert_eq!(widget.booking_request().unwrap().form.guests, "5");

        widget.set_selection(Selection::Empty);
        assert!(widget.booking_request().is_none());
    }
}
