//! Terminal setup and teardown for the interactive session.

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::sync::Once;
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back when dropped, including during unwinding.
pub struct Guard {
    _private: (),
}

impl Drop for Guard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// Enter raw mode and the alternate screen. The terminal is restored if any
/// step fails, and again when the returned guard drops or the process panics.
pub fn init() -> Result<(Tui, Guard)> {
    install_panic_hook();

    enable_raw_mode().context("enabling raw mode")?;
    let guard = Guard { _private: () };

    execute!(io::stdout(), EnterAlternateScreen).context("entering alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("creating terminal")?;

    Ok((terminal, guard))
}

/// Leave the alternate screen and raw mode. Safe to call more than once.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    leave(&mut io::stdout())?;
    raw
}

fn leave(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore();
            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_writes_screen_and_cursor_sequences() {
        let mut out = Vec::new();
        leave(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    #[test]
    fn test_leave_is_repeatable() {
        let mut out = Vec::new();
        leave(&mut out).unwrap();
        leave(&mut out).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn test_disable_raw_mode_without_enable_is_ok() {
        assert!(disable_raw_mode().is_ok());
        assert!(disable_raw_mode().is_ok());
    }
}
