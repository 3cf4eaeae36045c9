use crate::domain::BookingRequest;
use anyhow::Result;
use chrono::{DateTime, Local};
use log::warn;

/// Context provided to confirmation hooks
#[derive(Debug, Clone)]
pub struct ConfirmContext {
    /// Where the visitor is sent once the booking is confirmed
    pub destination: String,
    pub confirmed_at: DateTime<Local>,
}

/// Trait for plugins that receive confirmed bookings
pub trait ConfirmHook {
    /// Called once the visitor confirms a computed summary
    fn on_booking_confirmed(&self, context: &ConfirmContext, request: &BookingRequest) -> Result<()>;

    /// Human-readable name for this hook
    fn name(&self) -> &str;
}

/// Registry for managing confirmation hooks
pub struct HookRegistry {
    hooks: Vec<Box<dyn ConfirmHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a new confirmation hook
    pub fn register<H>(&mut self, hook: H)
    where
        H: ConfirmHook + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Execute all registered hooks; a failing hook does not stop the others
    pub fn execute_confirm_hooks(&self, context: &ConfirmContext, request: &BookingRequest) {
        for hook in &self.hooks {
            if let Err(e) = hook.on_booking_confirmed(context, request) {
                warn!("Hook '{}' failed: {}", hook.name(), e);
            }
        }
    }

    /// List all registered hooks
    pub fn list_hooks(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_utils::fixtures::{RecordingHook, sample_request};

    struct FailingHook;

    impl ConfirmHook for FailingHook {
        fn on_booking_confirmed(&self, _: &ConfirmContext, _: &BookingRequest) -> Result<()> {
            anyhow::bail!("destination unreachable")
        }

        fn name(&self) -> &str {
            "Failing"
        }
    }

    #[test]
    fn failing_hook_does_not_block_others() {
        let recorder = RecordingHook::default();
        let mut registry = HookRegistry::new();
        registry.register(FailingHook);
        registry.register(recorder.clone());

        let context = ConfirmContext {
            destination: "thanks.html".to_string(),
            confirmed_at: Local::now(),
        };
        registry.execute_confirm_hooks(&context, &sample_request());

        assert_eq!(registry.list_hooks(), vec!["Failing", "Recording"]);
        let received = recorder.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].0, "thanks.html");
        assert_eq!(received[0].1.summary.nights, 3);
    }
}
