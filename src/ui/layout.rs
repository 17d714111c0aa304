use crate::ui::app::Button;
use ratatui::layout::Rect;

// Rows inside the body block, top to bottom.
const ROW_COUNT: u16 = 0;
const ROW_ADD: u16 = 1;
const ROW_NOTE: u16 = 2;
const ROW_REDUCER: u16 = 4;
const ROW_REDUCER_BUTTONS: u16 = 5;
const ROW_INPUT: u16 = 7;
const ROW_STORED: u16 = 9;
const ROW_WINDOW: u16 = 11;

const INPUT_MAX_WIDTH: u16 = 40;
const BUTTON_GAP: u16 = 1;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Where every piece of the panel lands for a given frame size.
///
/// Rows that do not fit get zero height, which is how the text input ends
/// up detached on a very small terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub count: Rect,
    pub note: Rect,
    pub reducer: Rect,
    pub input: Rect,
    pub stored: Rect,
    pub window: Rect,
    pub buttons: Vec<(Button, Rect)>,
}

impl PanelLayout {
    pub fn compute(area: Rect) -> Self {
        let (header, body, footer) = layout_regions(area);
        let inner = inset(body);

        let mut buttons = Vec::with_capacity(4);
        buttons.extend(button_row(row(inner, ROW_ADD), &[Button::Add]));
        buttons.extend(button_row(
            row(inner, ROW_REDUCER_BUTTONS),
            &[Button::ReducerIncrement, Button::ReducerDecrement],
        ));

        let input_row = row(inner, ROW_INPUT);
        let focus_width = Button::FocusInput.width();
        let input_width = input_row
            .width
            .saturating_sub(focus_width + BUTTON_GAP)
            .min(INPUT_MAX_WIDTH);
        let input = Rect {
            width: input_width,
            ..input_row
        };
        let after_input = Rect {
            x: input_row.x + input_width + BUTTON_GAP,
            width: input_row.width.saturating_sub(input_width + BUTTON_GAP),
            ..input_row
        };
        buttons.extend(button_row(after_input, &[Button::FocusInput]));

        Self {
            header,
            body,
            footer,
            count: row(inner, ROW_COUNT),
            note: row(inner, ROW_NOTE),
            reducer: row(inner, ROW_REDUCER),
            input,
            stored: row(inner, ROW_STORED),
            window: row(inner, ROW_WINDOW),
            buttons,
        }
    }

    pub fn button_at(&self, column: u16, row: u16) -> Option<Button> {
        self.buttons
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(button, _)| *button)
    }

    pub fn input_contains(&self, column: u16, row: u16) -> bool {
        contains(self.input, column, row)
    }
}

/// Area inside a one-cell border.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn row(inner: Rect, index: u16) -> Rect {
    let fits = index < inner.height;
    Rect {
        x: inner.x,
        y: inner.y + index.min(inner.height),
        width: if fits { inner.width } else { 0 },
        height: u16::from(fits),
    }
}

/// Lay buttons out left to right, clipping at the row's right edge.
fn button_row(area: Rect, labels: &[Button]) -> Vec<(Button, Rect)> {
    let mut x = area.x;
    let right = area.x + area.width;
    labels
        .iter()
        .map(|button| {
            let width = button.width().min(right.saturating_sub(x));
            let rect = Rect {
                x,
                y: area.y,
                width: if area.height > 0 { width } else { 0 },
                height: area.height,
            };
            x = x.saturating_add(width + BUTTON_GAP).min(right);
            (*button, rect)
        })
        .collect()
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.width > 0
        && rect.height > 0
        && column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header, Rect::new(0, 0, 80, 3));
        assert_eq!(body, Rect::new(0, 3, 80, 18));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn full_layout_places_all_buttons() {
        let layout = PanelLayout::compute(Rect::new(0, 0, 80, 24));
        let ids: Vec<Button> = layout.buttons.iter().map(|(b, _)| *b).collect();
        assert_eq!(
            ids,
            vec![
                Button::Add,
                Button::ReducerIncrement,
                Button::ReducerDecrement,
                Button::FocusInput
            ]
        );
        assert!(layout.buttons.iter().all(|(_, r)| r.width > 0));
        assert_eq!(layout.input.height, 1);
        assert_eq!(layout.input.width, INPUT_MAX_WIDTH);
    }

    #[test]
    fn hit_testing_finds_buttons() {
        let layout = PanelLayout::compute(Rect::new(0, 0, 80, 24));
        let (_, add) = layout.buttons[0];
        assert_eq!(layout.button_at(add.x, add.y), Some(Button::Add));
        assert_eq!(layout.button_at(add.x + add.width, add.y), None);
        assert!(layout.input_contains(layout.input.x, layout.input.y));
    }

    #[test]
    fn short_terminal_hides_input_row() {
        let layout = PanelLayout::compute(Rect::new(0, 0, 80, 12));
        assert_eq!(layout.input.height, 0);
        assert_eq!(layout.button_at(0, layout.input.y), None);
    }
}
