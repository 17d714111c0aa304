use ratatui::layout::Rect;

/// Reference to the on-screen text input.
///
/// Attached once a layout pass gives the input a visible region. Focus
/// requests through a detached handle do nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusHandle {
    target: Option<Rect>,
}

impl FocusHandle {
    /// Bind to `area`. An empty area leaves the handle detached.
    pub fn attach(&mut self, area: Rect) {
        self.target = if area.width > 0 && area.height > 0 {
            Some(area)
        } else {
            None
        };
    }

    /// Drop the binding, e.g. when the input scrolls off a shrunken terminal.
    pub fn detach(&mut self) {
        self.target = None;
    }

    pub fn is_attached(&self) -> bool {
        self.target.is_some()
    }

}
