use crate::config::{Config, Palette, PaletteError};
use crate::ui::app::App;
use crate::ui::environment::{PageBackground, TerminalEnvironment};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::layout::PanelLayout;
use crate::ui::panel::CounterPanel;
use crate::ui::render::draw;
use crate::ui::resize::ResizeWatcher;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Everything the event loop needs, resolved from config and CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub palette: Palette,
    pub tick_rate: Duration,
    pub mouse: bool,
    pub input_placeholder: String,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Result<Self, PaletteError> {
        Ok(Self {
            palette: config.palette()?,
            tick_rate: config.ui.tick_rate(),
            mouse: config.ui.mouse,
            input_placeholder: config.panel.input_placeholder.clone(),
        })
    }
}

pub fn run(options: RunOptions) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(options.mouse)?;
    let tick_rate = options.tick_rate;

    let background = PageBackground::new();
    let environment = TerminalEnvironment::new(background.clone());
    let panel = CounterPanel::mount(Box::new(environment), options.palette);
    let mut app = App::new(panel, background, options.input_placeholder);

    let events = EventHandler::new(tick_rate, !cfg!(unix));
    let watcher = ResizeWatcher::start(events.sender(), || crossterm::terminal::size().ok())?;

    loop {
        terminal.draw(|frame| {
            app.apply_layout(PanelLayout::compute(frame.area()));
            draw(frame, &app);
        })?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            // Ticks only wake the loop for a redraw.
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::InputClosed) => {
                tracing::warn!("Terminal input closed, shutting down");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if let Some(watcher) = watcher {
        watcher.stop();
    }
    app.into_panel().unmount();
    drop(guard);
    Ok(())
}
