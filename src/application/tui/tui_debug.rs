use crossterm::{
    ExecutableCommand,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
    },
    tty::IsTty,
};
use std::io::{self, stdout};

/// Minimum terminal size the booking screen lays itself out for.
pub const MIN_COLUMNS: u16 = 82;
pub const MIN_ROWS: u16 = 24;

/// Outcome of probing the terminal before starting the booking screen.
#[derive(Debug, Default)]
pub struct TerminalReport {
    pub lines: Vec<String>,
}

impl TerminalReport {
    fn pass(&mut self, what: &str) {
        self.lines.push(format!("✓ {}", what));
    }

    fn warn(&mut self, what: String) {
        self.lines.push(format!("! {}", what));
    }
}

/// Check TTY, raw mode, alternate screen and size; restores the terminal before returning.
pub fn check_terminal() -> io::Result<TerminalReport> {
    let mut report = TerminalReport::default();

    if !IsTty::is_tty(&stdout()) {
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "The booking screen requires a TTY",
        ));
    }
    report.pass("Running in a TTY");

    enable_raw_mode()?;
    report.pass("Raw mode enabled");

    if let Err(e) = stdout().execute(EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    report.pass("Alternate screen enabled");

    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    report.pass("Terminal restored");

    let (columns, rows) = size()?;
    if columns < MIN_COLUMNS || rows < MIN_ROWS {
        report.warn(format!(
            "Terminal is {}x{}; the booking screen needs at least {}x{}",
            columns, rows, MIN_COLUMNS, MIN_ROWS
        ));
    } else {
        report.pass("Terminal size is sufficient");
    }

    Ok(report)
}
