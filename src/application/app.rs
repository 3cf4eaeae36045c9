use crate::application::{BookingScreen, BookingView, BookingViewResult, Config, Theme, TuiRenderer};
use crate::domain::{
    BookingRequest, BookingWidget, DisplayedPeriod, Locale, SelectOutcome, Selection, ThaiLocale,
};
use crate::infrastructure::{ConfirmContext, HookRegistry, SimpleLoggerHook};
use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use log::{debug, info};

pub struct VillaApp {
    config: Config,
    hook_registry: HookRegistry,
    locale: ThaiLocale,
}

impl VillaApp {
    pub fn new() -> Result<Self> {
        Ok(Self::with_default_plugins(Config::from_env()?))
    }

    pub fn with_default_plugins(config: Config) -> Self {
        let mut hook_registry = HookRegistry::new();
        hook_registry.register(SimpleLoggerHook);
        Self::with_hooks(config, hook_registry)
    }

    pub fn with_hooks(config: Config, hook_registry: HookRegistry) -> Self {
        debug!("Confirmation hooks: {}", hook_registry.list_hooks().join(", "));
        Self {
            config,
            hook_registry,
            locale: ThaiLocale,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn widget(&self, today: NaiveDate) -> Result<BookingWidget> {
        let unavailable = self
            .config
            .unavailable()
            .context("Failed to read unavailable dates")?;
        Ok(BookingWidget::new(today, unavailable, self.config.pricing()))
    }

    /// Interactive booking screen; confirmations are handed to the hooks.
    pub fn run_booking(&self, month: Option<DisplayedPeriod>) -> Result<()> {
        let today = Self::today();
        let mut widget = self.widget(today)?;
        if let Some(period) = month {
            widget.show_month(period);
        }

        let screen = BookingScreen::new(
            widget,
            today,
            Theme::by_name(&self.config.theme),
            Box::new(self.locale),
        );
        let result = {
            let mut view = BookingView::new(screen)?;
            view.run()?
        }; // view is dropped here, restoring the terminal

        match result {
            BookingViewResult::Confirmed(request) => {
                let destination = self.confirm(&request);
                println!("{} -> {}", self.locale.confirm_label(), destination);
            }
            BookingViewResult::Exited => info!("Booking screen closed without confirmation"),
        }
        Ok(())
    }

    /// Hand a confirmed request to every hook and return the destination.
    pub fn confirm(&self, request: &BookingRequest) -> &str {
        let context = ConfirmContext {
            destination: self.config.confirmation_target.clone(),
            confirmed_at: Local::now(),
        };
        self.hook_registry.execute_confirm_hooks(&context, request);
        &self.config.confirmation_target
    }

    /// Print `period` with the selection that clicking `clicks` in order would produce.
    pub fn calendar_text(
        &self,
        period: DisplayedPeriod,
        clicks: &[NaiveDate],
        colored: bool,
    ) -> Result<String> {
        let mut widget = self.widget(period.first_day())?;
        for &date in clicks {
            if let SelectOutcome::Ignored = widget.select_day(date) {
                return Err(anyhow!("{} is unavailable", date));
            }
        }

        let mut renderer = TuiRenderer::new(&self.locale);
        if colored {
            renderer = renderer.with_theme(Theme::by_name(&self.config.theme));
        }
        Ok(renderer.render_calendar(&widget.view()))
    }

    /// Quote a stay the same way the booking form does, including the
    /// unavailable-date guard on both ends.
    pub fn quote_text(&self, check_in: NaiveDate, check_out: NaiveDate, guests: &str) -> Result<String> {
        let mut widget = self.widget(check_in)?;
        widget.form_mut().guests = guests.to_string();
        for date in [check_in, check_out] {
            if widget.unavailable().contains(date) {
                return Err(anyhow!("{} is unavailable", date));
            }
        }
        widget.set_selection(Selection::Range {
            start: check_in,
            end: check_out,
        });

        let summary = widget
            .submit()
            .map_err(|e| anyhow!("{}", self.locale.validation_message(e)))?;
        Ok(TuiRenderer::new(&self.locale).render_summary(summary))
    }
}
