use crate::domain::BookingRequest;
use crate::infrastructure::{ConfirmContext, ConfirmHook};
use anyhow::Result;
use log::info;

/// Logs every confirmed booking through the `log` facade
pub struct SimpleLoggerHook;

impl ConfirmHook for SimpleLoggerHook {
    fn on_booking_confirmed(&self, context: &ConfirmContext, request: &BookingRequest) -> Result<()> {
        let summary = &request.summary;
        info!(
            "[{}] Booking confirmed {} -> {} ({} nights, {} guests) - total {}, deposit {} - handing off to {}",
            context.confirmed_at.format("%Y-%m-%d %H:%M:%S"),
            summary.check_in,
            summary.check_out,
            summary.nights,
            summary.guests,
            summary.total,
            summary.deposit,
            context.destination
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "Simple Logger"
    }
}
