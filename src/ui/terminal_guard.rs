use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminal modes the panel switches on for its lifetime.
#[derive(Debug, Clone, Copy)]
struct ScreenModes {
    mouse: bool,
}

impl ScreenModes {
    fn enter<W: Write>(self, out: &mut W) -> io::Result<()> {
        enable_raw_mode()?;
        out.execute(EnterAlternateScreen)?;
        if self.mouse {
            out.execute(EnableMouseCapture)?;
        }
        out.execute(TermClear(ClearType::All))?;
        out.execute(Hide)?;
        Ok(())
    }

    /// Every step runs even when an earlier one fails.
    fn leave(self) {
        let mut out = io::stdout();
        if self.mouse {
            let _ = out.execute(DisableMouseCapture);
        }
        let _ = out.execute(LeaveAlternateScreen);
        let _ = out.execute(Show);
        let _ = disable_raw_mode();
    }
}

/// One-shot flag shared by the guard and the panic hook.
#[derive(Debug, Clone)]
struct Armed(Arc<AtomicBool>);

impl Armed {
    fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// True for the first caller only.
    fn disarm(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Owns the terminal modes. They are left on drop, or from the panic hook
/// when the UI thread panics first, never twice.
pub struct TerminalGuard {
    modes: ScreenModes,
    armed: Armed,
}

impl TerminalGuard {
    fn arm(modes: ScreenModes) -> Self {
        let armed = Armed::new();
        let hook_armed = armed.clone();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if hook_armed.disarm() {
                modes.leave();
            }
            previous(info);
        }));
        Self { modes, armed }
    }

    fn release(&self) {
        if self.armed.disarm() {
            self.modes.leave();
            tracing::debug!("Terminal modes restored");
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// Enter raw mode and the alternate screen, optionally with mouse capture.
/// A failure part way through unwinds whatever was already switched on.
pub fn setup_terminal(
    mouse: bool,
) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let modes = ScreenModes { mouse };
    let guard = TerminalGuard::arm(modes);
    let mut stdout = io::stdout();
    modes.enter(&mut stdout)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
