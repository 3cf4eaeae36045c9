/// Test utilities shared by the widget, renderer and hook tests
///
/// Fixtures mirror the villa's shipped configuration: the default unavailable
/// dates and a session opened in November 2025.
///
/// ## Usage Examples
///
/// ```rust,ignore
/// use crate::infrastructure::test_utils::fixtures::{date, november_widget};
///
/// #[test]
/// fn my_test() {
///     let mut widget = november_widget();
///     widget.select_day(date("2025-11-10"));
/// }
/// ```
#[cfg(test)]
pub mod fixtures {
    use crate::domain::{
        BookingForm, BookingRequest, BookingWidget, DEFAULT_UNAVAILABLE_DATES, Pricing,
        Selection, UnavailableDates,
    };
    use crate::infrastructure::{ConfirmContext, ConfirmHook};
    use anyhow::Result;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Parse a `YYYY-MM-DD` literal
    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("Invalid test date")
    }

    pub fn villa_unavailable() -> UnavailableDates {
        UnavailableDates::from_iso(DEFAULT_UNAVAILABLE_DATES).expect("Invalid default dates")
    }

    /// Widget opened on 5 November 2025 with the default rate and blocked dates
    pub fn november_widget() -> BookingWidget {
        BookingWidget::new(date("2025-11-05"), villa_unavailable(), Pricing::default())
    }

    /// A confirmed 3-night stay for 4 guests
    pub fn sample_request() -> BookingRequest {
        let selection = Selection::Range {
            start: date("2025-11-10"),
            end: date("2025-11-13"),
        };
        let summary = Pricing::default()
            .quote(&selection, "4")
            .expect("Sample selection is valid");
        BookingRequest {
            summary,
            form: BookingForm {
                guests: "4".to_string(),
                name: "Test Guest".to_string(),
                phone: "0800000000".to_string(),
                email: "guest@example.com".to_string(),
            },
        }
    }

    /// Hook that remembers every destination and request it receives
    #[derive(Clone, Default)]
    pub struct RecordingHook {
        received: Rc<RefCell<Vec<(String, BookingRequest)>>>,
    }

    impl RecordingHook {
        pub fn received(&self) -> Vec<(String, BookingRequest)> {
            self.received.borrow().clone()
        }
    }

    impl ConfirmHook for RecordingHook {
        fn on_booking_confirmed(&self, context: &ConfirmContext, request: &BookingRequest) -> Result<()> {
            self.received
                .borrow_mut()
                .push((context.destination.clone(), request.clone()));
            Ok(())
        }

        fn name(&self) -> &str {
            "Recording"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn fixtures_match_shipped_configuration() {
        let widget = november_widget();
        assert_eq!(widget.unavailable().len(), 3);
        assert_eq!(widget.pricing().nightly_rate, 5_900);
        assert_eq!(sample_request().summary.deposit, 5_310);
    }
}
