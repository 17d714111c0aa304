//! The counter panel: every piece of reactive state the UI shows.
//!
//! All mutation goes through the methods below. Anything that touches the
//! primary count settles derived values before returning.

use crate::config::Palette;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::environment::Environment;
use crate::ui::focus::FocusHandle;
use crate::ui::input_field::{InputFieldState, InputIntent, InputReducer};
use crate::ui::memo::Memo;
use crate::ui::mvi::Reducer;
use crate::ui::viewport::ViewportSize;
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct CounterPanel {
    count: u64,
    reducer: CounterState,
    /// `count * 2`, keyed on `count`. Widened so the doubling never clips.
    stored_value: Memo<u64, u128>,
    /// `count % 6`, keyed on `count`. A recompute repaints the background.
    background_index: Memo<u64, usize>,
    input: InputFieldState,
    focus: FocusHandle,
    viewport: ViewportSize,
    palette: Palette,
    env: Box<dyn Environment>,
}

impl CounterPanel {
    /// Create the panel, read the initial viewport and paint the first
    /// background.
    pub fn mount(env: Box<dyn Environment>, palette: Palette) -> Self {
        let viewport = env.viewport();
        let mut panel = Self {
            count: 0,
            reducer: CounterState::default(),
            stored_value: Memo::new(),
            background_index: Memo::new(),
            input: InputFieldState::default(),
            focus: FocusHandle::default(),
            viewport,
            palette,
            env,
        };
        panel.settle();
        tracing::info!(viewport = %viewport, "Counter panel mounted");
        panel
    }

    pub fn unmount(self) {
        tracing::info!(
            count = self.count,
            reducer_count = self.reducer.value,
            "Counter panel unmounted"
        );
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
        tracing::debug!(count = self.count, "Increment");
        self.settle();
    }

    pub fn reducer_increment(&mut self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn reducer_decrement(&mut self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn dispatch(&mut self, intent: CounterIntent) {
        if let CounterIntent::Unrecognized(tag) = &intent {
            tracing::debug!(tag = %tag, "Ignoring unrecognized counter action");
        }
        dispatch_mvi!(self, reducer, CounterReducer, intent);
        tracing::debug!(reducer_count = self.reducer.value, "Reducer dispatch");
    }

    /// Dispatch by action tag; unknown tags leave the counter untouched.
    pub fn dispatch_tag(&mut self, tag: &str) {
        self.dispatch(CounterIntent::from_tag(tag));
    }

    /// Move keyboard focus to the text input if it is on screen.
    pub fn focus_input(&mut self) {
        if !self.focus.is_attached() {
            tracing::debug!("Focus requested before input was attached");
            return;
        }
        dispatch_mvi!(self, input, InputReducer, InputIntent::Focus);
        tracing::debug!("Input focused");
    }

    pub fn blur_input(&mut self) {
        dispatch_mvi!(self, input, InputReducer, InputIntent::Blur);
    }

    /// Apply an edit to the text input. `Focus` goes through the focus
    /// handle like any other focus request.
    pub fn edit_input(&mut self, intent: InputIntent) {
        match intent {
            InputIntent::Focus => self.focus_input(),
            other => {
                dispatch_mvi!(self, input, InputReducer, other);
            }
        }
    }

    /// Bind the focus handle to the input's on-screen region. An empty
    /// region detaches it and drops focus.
    pub fn attach_input(&mut self, area: Rect) {
        if area.is_empty() {
            self.focus.detach();
            if self.input.focused {
                self.blur_input();
            }
            return;
        }
        self.focus.attach(area);
    }

    pub fn on_viewport_resize(&mut self, width: u16, height: u16) {
        self.viewport = ViewportSize::new(width, height);
        tracing::debug!(viewport = %self.viewport, "Viewport resized");
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn stored_value(&self) -> u128 {
        self.stored_value.get().copied().unwrap_or(0)
    }

    /// How many times the stored value has been computed since mount.
    pub fn stored_value_computations(&self) -> u64 {
        self.stored_value.computations()
    }

    pub fn reducer_count(&self) -> i64 {
        self.reducer.value
    }

    pub fn background_index(&self) -> usize {
        self.background_index.get().copied().unwrap_or(0)
    }

    pub fn background_color(&self) -> Color {
        self.palette.color(self.background_index())
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn input(&self) -> &InputFieldState {
        &self.input
    }

    pub fn focus_handle(&self) -> &FocusHandle {
        &self.focus
    }

    /// Recompute derived values whose dependencies changed and run the
    /// background side effect.
    fn settle(&mut self) {
        let count = self.count;
        self.stored_value.update(&count, |c| u128::from(*c) * 2);
        if self
            .background_index
            .update(&count, |c| Palette::index_for(*c))
        {
            let color = self.background_color();
            tracing::debug!(index = self.background_index(), ?color, "Background changed");
            self.env.set_background(color);
        }
    }
}
