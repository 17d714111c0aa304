//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use hookpanel::config::Palette;
use hookpanel::ui::app::App;
use hookpanel::ui::environment::{Environment, PageBackground};
use hookpanel::ui::layout::PanelLayout;
use hookpanel::ui::panel::CounterPanel;
use hookpanel::ui::viewport::ViewportSize;
use parking_lot::Mutex;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::sync::Arc;

pub type BackgroundLog = Arc<Mutex<Vec<Color>>>;

/// Environment that reports a fixed viewport and records every background
/// it is asked to paint.
pub struct RecordingEnvironment {
    viewport: ViewportSize,
    log: BackgroundLog,
}

impl RecordingEnvironment {
    pub fn new(width: u16, height: u16) -> (Self, BackgroundLog) {
        let log: BackgroundLog = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                viewport: ViewportSize::new(width, height),
                log: Arc::clone(&log),
            },
            log,
        )
    }
}

impl Environment for RecordingEnvironment {
    fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    fn set_background(&mut self, color: Color) {
        self.log.lock().push(color);
    }
}

pub fn make_panel() -> (CounterPanel, BackgroundLog) {
    let (env, log) = RecordingEnvironment::new(800, 600);
    (CounterPanel::mount(Box::new(env), Palette::default()), log)
}

/// App with a laid-out 80x24 frame, so the focus handle is attached.
pub fn make_app() -> (App, BackgroundLog) {
    let (panel, log) = make_panel();
    let mut app = App::new(panel, PageBackground::new(), "Type something here...".to_string());
    app.apply_layout(PanelLayout::compute(Rect::new(0, 0, 80, 24)));
    (app, log)
}
