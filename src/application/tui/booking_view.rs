use super::theme::Theme;
use crate::domain::{
    BookingError, BookingRequest, BookingWidget, CalendarView, DayCell, DisplayedPeriod,
    FormField, GridCell, Locale, NavMenu, SITE_PAGES, SelectOutcome,
};
use chrono::{Datelike, Duration, NaiveDate};
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::tty::IsTty;
use log::{LevelFilter, debug, info};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};
use std::io::{self, Stdout, stdout};

#[derive(Debug, Clone)]
pub enum BookingViewResult {
    /// User left without confirming
    Exited,
    /// User confirmed the computed summary
    Confirmed(BookingRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Calendar,
    Field(FormField),
}

/// Booking page state and key bindings, independent of any terminal.
pub struct BookingScreen {
    widget: BookingWidget,
    menu: NavMenu,
    /// Day under the keyboard cursor; always inside the displayed month
    cursor: NaiveDate,
    focus: Focus,
    /// Blocking validation message, dismissed by any key
    notice: Option<BookingError>,
    show_help: bool,
    should_exit: bool,
    confirmed: Option<BookingRequest>,
    theme: Theme,
    locale: Box<dyn Locale>,
}

impl BookingScreen {
    pub fn new(widget: BookingWidget, today: NaiveDate, theme: Theme, locale: Box<dyn Locale>) -> Self {
        let period = widget.period();
        let cursor = if DisplayedPeriod::containing(today) == period {
            today
        } else {
            period.first_day()
        };

        Self {
            widget,
            menu: NavMenu::new(),
            cursor,
            focus: Focus::Calendar,
            notice: None,
            show_help: false,
            should_exit: false,
            confirmed: None,
            theme,
            locale,
        }
    }

    pub fn widget(&self) -> &BookingWidget {
        &self.widget
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn notice(&self) -> Option<BookingError> {
        self.notice
    }

    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn result(&self) -> BookingViewResult {
        match &self.confirmed {
            Some(request) => BookingViewResult::Confirmed(request.clone()),
            None => BookingViewResult::Exited,
        }
    }

    /// Move the cursor, following it into neighbouring months
    fn move_cursor(&mut self, days: i64) {
        self.cursor += Duration::days(days);
        let period = DisplayedPeriod::containing(self.cursor);
        if period != self.widget.period() {
            self.widget.show_month(period);
        }
    }

    /// Show an adjacent month, keeping the cursor on the same day number where possible
    fn shift_month(&mut self, forward: bool) {
        if forward {
            self.widget.show_next_month();
        } else {
            self.widget.show_prev_month();
        }
        let period = self.widget.period();
        let day = self.cursor.day().min(period.days_in_month());
        self.cursor = period.first_day() + Duration::days(i64::from(day) - 1);
    }

    fn submit(&mut self) {
        if let Err(e) = self.widget.submit() {
            debug!("Submission rejected: {}", e);
            self.notice = Some(e);
        }
    }

    fn confirm(&mut self) {
        if let Some(request) = self.widget.booking_request() {
            info!("Booking confirmed for {}", request.summary.check_in);
            self.confirmed = Some(request);
            self.should_exit = true;
        }
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.notice.is_some() {
            self.notice = None;
            return;
        }

        // Ctrl+C and Ctrl+D quit from anywhere
        if matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('d'), KeyModifiers::CONTROL)
        ) {
            self.should_exit = true;
            return;
        }

        match self.focus {
            Focus::Calendar => self.handle_calendar_key(key),
            Focus::Field(field) => self.handle_field_key(field, key),
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_exit = true;
            }

            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(7),

            KeyCode::PageUp | KeyCode::Char('<') | KeyCode::Char(',') => self.shift_month(false),
            KeyCode::PageDown | KeyCode::Char('>') | KeyCode::Char('.') => self.shift_month(true),

            KeyCode::Char(' ') | KeyCode::Enter => {
                if let SelectOutcome::Ignored = self.widget.select_day(self.cursor) {
                    debug!("{} is unavailable", self.cursor);
                }
            }

            KeyCode::Char('s') => self.submit(),
            KeyCode::Char('c') => self.confirm(),

            KeyCode::Tab => self.focus = Focus::Field(FormField::Guests),
            KeyCode::Char('m') => self.menu.toggle(),
            KeyCode::Char('?') => self.show_help = !self.show_help,

            _ => {}
        }
    }

    fn handle_field_key(&mut self, field: FormField, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.focus = field.next().map_or(Focus::Calendar, Focus::Field);
            }
            KeyCode::Esc | KeyCode::BackTab => self.focus = Focus::Calendar,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.widget.form_mut().field_mut(field).pop();
            }
            KeyCode::Char(ch) if matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.widget.form_mut().field_mut(field).push(ch)
            }
            _ => {}
        }
    }

    /// Calculate centered area with both horizontal and vertical centering
    fn calculate_centered_area(available: Rect, needed_width: u16, needed_height: u16) -> Rect {
        let width = std::cmp::min(available.width, needed_width);
        let height = std::cmp::min(available.height, needed_height);

        Rect {
            x: available.x + (available.width - width) / 2,
            y: available.y + (available.height - height) / 2,
            width,
            height,
        }
    }

    fn day_style(&self, cell: &DayCell) -> Style {
        let colors = &self.theme.colors;
        if cell.date == self.cursor && self.focus == Focus::Calendar {
            colors.cursor.to_ratatui_with_modifier(Modifier::BOLD)
        } else if cell.unavailable {
            colors.unavailable.to_ratatui_with_modifier(Modifier::CROSSED_OUT)
        } else if cell.selected {
            colors.selected.to_ratatui_with_modifier(Modifier::BOLD)
        } else if cell.in_range {
            colors.in_range.to_ratatui()
        } else {
            colors.day.to_ratatui()
        }
    }

    fn calendar_table(&self, view: &CalendarView) -> Table<'static> {
        let colors = &self.theme.colors;
        let header = Row::new(
            self.locale
                .weekday_labels()
                .iter()
                .map(|label| Cell::from(*label).style(colors.weekday.to_ratatui())),
        )
        .height(1);

        let rows: Vec<Row> = view
            .weeks()
            .map(|week| {
                Row::new(week.iter().map(|cell| match cell {
                    GridCell::Blank => Cell::from(""),
                    GridCell::Day(day) => {
                        Cell::from(format!("{:>3}", day.day())).style(self.day_style(day))
                    }
                }))
            })
            .collect();

        Table::new(rows, [Constraint::Length(4); 7])
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(colors.border.to_ratatui())
                    .title(format!("<  {}  >", self.locale.month_title(view.period)))
                    .title_style(colors.header.to_ratatui_with_modifier(Modifier::BOLD))
                    .title_alignment(Alignment::Center),
            )
            .column_spacing(1)
    }

    fn form_panel(&self) -> Paragraph<'static> {
        let colors = &self.theme.colors;
        let (check_in, check_out) = self.widget.form_dates();
        let mut lines = vec![
            Line::from(format!("Check-in:  {}", check_in)),
            Line::from(format!("Check-out: {}", check_out)),
            Line::from(""),
        ];

        for field in FormField::ALL {
            let focused = self.focus == Focus::Field(field);
            let value = self.widget.form().field(field);
            let style = if focused {
                colors.accent.to_ratatui_with_modifier(Modifier::BOLD)
            } else {
                colors.normal_text.to_ratatui()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", self.locale.field_label(field)), colors.weekday.to_ratatui()),
                Span::styled(format!("{}{}", value, if focused { "_" } else { "" }), style),
            ]));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(colors.border.to_ratatui()),
        )
    }

    fn summary_panel(&self) -> Option<Paragraph<'static>> {
        let summary = self.widget.summary()?;
        let colors = &self.theme.colors;
        let mut lines: Vec<Line> = self
            .locale
            .summary_lines(summary)
            .into_iter()
            .map(|line| Line::styled(line, colors.normal_text.to_ratatui()))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("[c] {}", self.locale.confirm_label()),
            colors.accent.to_ratatui_with_modifier(Modifier::BOLD),
        ));

        Some(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(colors.border.to_ratatui())
                    .title(self.locale.summary_heading())
                    .title_style(colors.header.to_ratatui()),
            ),
        )
    }

    fn help_text(&self) -> Paragraph<'static> {
        let text = if self.show_help {
            "←→↑↓/hjkl=Day • </>=Month • Space=Select • Tab=Form • s=Submit • c=Confirm • m=Menu • q=Quit"
        } else {
            "?=Help"
        };
        Paragraph::new(Line::from(Span::styled(
            text,
            self.theme.colors.help_text.to_ratatui(),
        )))
        .alignment(Alignment::Center)
    }

    pub fn draw(&self, frame: &mut Frame) {
        const CALENDAR_WIDTH: u16 = 38;
        const CALENDAR_HEIGHT: u16 = 10;
        const SIDE_WIDTH: u16 = 44;
        const SUMMARY_HEIGHT: u16 = 13;
        const HELP_HEIGHT: u16 = 1;

        let area = Self::calculate_centered_area(
            frame.area(),
            CALENDAR_WIDTH + SIDE_WIDTH,
            CALENDAR_HEIGHT + SUMMARY_HEIGHT + HELP_HEIGHT,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(CALENDAR_HEIGHT), Constraint::Length(HELP_HEIGHT)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CALENDAR_WIDTH), Constraint::Min(SIDE_WIDTH)])
            .split(rows[0]);
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CALENDAR_HEIGHT), Constraint::Min(0)])
            .split(columns[1]);

        let view = self.widget.view();
        frame.render_widget(self.calendar_table(&view), columns[0]);
        frame.render_widget(self.form_panel(), side[0]);
        if let Some(summary) = self.summary_panel() {
            frame.render_widget(summary, side[1]);
        }
        frame.render_widget(self.help_text(), rows[1]);

        if self.menu.is_open() {
            let lines: Vec<Line> = SITE_PAGES.iter().map(|page| Line::from(*page)).collect();
            let menu_area = Rect {
                x: area.x,
                y: area.y,
                width: area.width.min(20),
                height: area.height.min(SITE_PAGES.len() as u16 + 2),
            };
            frame.render_widget(Clear, menu_area);
            frame.render_widget(
                Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Menu")),
                menu_area,
            );
        }

        if let Some(error) = self.notice {
            let popup = Self::calculate_centered_area(area, 50, 5);
            frame.render_widget(Clear, popup);
            frame.render_widget(
                Paragraph::new(self.locale.validation_message(error))
                    .style(self.theme.colors.error_text.to_ratatui())
                    .wrap(Wrap { trim: true })
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                popup,
            );
        }
    }
}

/// Silences the `log` facade while held; the logger writes to the same
/// terminal the alternate screen is drawn on.
struct LogPause {
    previous: LevelFilter,
}

impl LogPause {
    fn start() -> Self {
        let previous = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self { previous }
    }
}

impl Drop for LogPause {
    fn drop(&mut self) {
        log::set_max_level(self.previous);
    }
}

/// Runs a [`BookingScreen`] on the real terminal.
pub struct BookingView {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    screen: BookingScreen,
    log_pause: Option<LogPause>,
}

impl BookingView {
    pub fn new(screen: BookingScreen) -> io::Result<Self> {
        // First check if we're in a proper terminal
        if !IsTty::is_tty(&std::io::stdout()) {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "Not running in a TTY, cannot initialize terminal interface",
            ));
        }

        enable_raw_mode()
            .map_err(|e| io::Error::other(format!("Failed to enable raw mode: {}", e)))?;

        stdout().execute(EnterAlternateScreen).map_err(|e| {
            let _ = disable_raw_mode(); // Clean up on failure
            io::Error::other(format!("Failed to enter alternate screen: {}", e))
        })?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).map_err(|e| {
            let _ = disable_raw_mode();
            let _ = stdout().execute(LeaveAlternateScreen);
            io::Error::other(format!("Failed to create terminal: {}", e))
        })?;

        Ok(Self {
            terminal,
            screen,
            log_pause: Some(LogPause::start()),
        })
    }

    /// Run the booking TUI loop
    pub fn run(&mut self) -> io::Result<BookingViewResult> {
        while !self.screen.should_exit() {
            let screen = &self.screen;
            self.terminal.draw(|frame| screen.draw(frame))?;

            // Poll with a timeout so resizes redraw promptly
            if poll(std::time::Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.screen.handle_key_event(key);
                }
            }
        }

        self.cleanup()?;
        Ok(self.screen.result())
    }

    /// Explicit cleanup method
    fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.log_pause = None;
        Ok(())
    }
}

impl Drop for BookingView {
    fn drop(&mut self) {
        // Fallback cleanup if explicit cleanup wasn't called
        let _ = self.cleanup();
    }
}
