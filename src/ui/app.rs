use crate::ui::environment::PageBackground;
use crate::ui::layout::PanelLayout;
use crate::ui::panel::CounterPanel;

/// Clickable controls on the panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Button {
    Add,
    ReducerIncrement,
    ReducerDecrement,
    FocusInput,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Add => "Add",
            Button::ReducerIncrement => "Increment Reducer",
            Button::ReducerDecrement => "Decrement Reducer",
            Button::FocusInput => "Focus Input",
        }
    }

    /// Rendered width of `[ label ]`.
    pub fn width(self) -> u16 {
        self.label().chars().count() as u16 + 4
    }
}

pub struct App {
    should_quit: bool,
    panel: CounterPanel,
    background: PageBackground,
    layout: Option<PanelLayout>,
    input_placeholder: String,
}

impl App {
    pub fn new(panel: CounterPanel, background: PageBackground, input_placeholder: String) -> Self {
        Self {
            should_quit: false,
            panel,
            background,
            layout: None,
            input_placeholder,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn panel(&self) -> &CounterPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut CounterPanel {
        &mut self.panel
    }

    /// Hand the panel back for unmounting.
    pub fn into_panel(self) -> CounterPanel {
        self.panel
    }

    pub fn page_background(&self) -> &PageBackground {
        &self.background
    }

    pub fn input_placeholder(&self) -> &str {
        &self.input_placeholder
    }

    pub fn layout(&self) -> Option<&PanelLayout> {
        self.layout.as_ref()
    }

    /// Record where things were drawn and bind the focus handle to the
    /// input's region.
    pub fn apply_layout(&mut self, layout: PanelLayout) {
        self.panel.attach_input(layout.input);
        self.layout = Some(layout);
    }

    pub fn press(&mut self, button: Button) {
        tracing::debug!(?button, "Button pressed");
        match button {
            Button::Add => self.panel.increment(),
            Button::ReducerIncrement => self.panel.reducer_increment(),
            Button::ReducerDecrement => self.panel.reducer_decrement(),
            Button::FocusInput => self.panel.focus_input(),
        }
    }

    /// Left click at a cell. Clicking anything other than the input takes
    /// focus away from it first.
    pub fn on_click(&mut self, column: u16, row: u16) {
        let Some(layout) = &self.layout else {
            return;
        };
        if layout.input_contains(column, row) {
            self.panel.focus_input();
            return;
        }
        let hit = layout.button_at(column, row);
        if self.panel.input().focused {
            self.panel.blur_input();
        }
        if let Some(button) = hit {
            self.press(button);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.panel.on_viewport_resize(cols, rows);
    }
}
