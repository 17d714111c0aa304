use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::input_field::InputFieldState;
use crate::ui::layout::PanelLayout;
use crate::ui::theme::{
    BORDER, BUTTON_BG, BUTTON_TEXT, INPUT_BG, INPUT_FOCUSED_BG, TEXT, TEXT_MUTED,
};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const BACKGROUND_NOTE: &str = "The background color changes based on the count!";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let computed;
    let layout = match app.layout() {
        Some(layout) => layout,
        None => {
            computed = PanelLayout::compute(area);
            &computed
        }
    };
    let panel = app.panel();

    let background = app.page_background().get().unwrap_or(Color::Reset);
    frame.render_widget(Block::default().style(Style::default().bg(background)), area);

    frame.render_widget(Header::new().widget(), layout.header);
    frame.render_widget(
        Block::default()
            .title(Span::styled(" Counter ", Style::default().fg(TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER)),
        layout.body,
    );

    render_value(frame, layout.count, "Count: ", panel.count().to_string());
    frame.render_widget(
        Paragraph::new(BACKGROUND_NOTE).style(
            Style::default()
                .fg(TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        ),
        layout.note,
    );
    render_value(
        frame,
        layout.reducer,
        "Reducer Count: ",
        panel.reducer_count().to_string(),
    );
    render_value(
        frame,
        layout.stored,
        "Stored Value (count * 2): ",
        panel.stored_value().to_string(),
    );
    render_value(
        frame,
        layout.window,
        "Window Size: ",
        panel.viewport().to_string(),
    );

    let button_style = Style::default()
        .fg(BUTTON_TEXT)
        .bg(BUTTON_BG)
        .add_modifier(Modifier::BOLD);
    for (button, rect) in &layout.buttons {
        if rect.width == 0 || rect.height == 0 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(format!("[ {} ]", button.label())).style(button_style),
            *rect,
        );
    }

    if let Some((x, y)) = render_input(frame, layout.input, panel.input(), app.input_placeholder()) {
        frame.set_cursor_position((x, y));
    }

    let footer = Footer::new();
    frame.render_widget(
        footer.widget(layout.footer, panel.input().focused),
        layout.footer,
    );
}

fn render_value(frame: &mut Frame<'_>, area: Rect, label: &'static str, value: String) {
    let line = Line::from(vec![
        Span::styled(label, Style::default().fg(TEXT)),
        Span::styled(value, Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the text input, scrolled so the cursor stays visible. Returns the
/// cursor cell when the input is focused.
fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &InputFieldState,
    placeholder: &str,
) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let bg = if state.focused {
        INPUT_FOCUSED_BG
    } else {
        INPUT_BG
    };
    let width = area.width as usize;

    let paragraph = if state.text.is_empty() && !state.focused {
        Paragraph::new(placeholder.to_string()).style(
            Style::default()
                .fg(TEXT_MUTED)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        let start = visible_start(state.cursor, width);
        let visible: String = state.text.chars().skip(start).take(width).collect();
        Paragraph::new(visible).style(Style::default().fg(TEXT).bg(bg))
    };
    frame.render_widget(paragraph, area);

    if !state.focused {
        return None;
    }
    let start = visible_start(state.cursor, width);
    let offset = (state.cursor - start) as u16;
    Some((area.x + offset, area.y))
}

/// First visible char index so that `cursor` lands inside `width` cells.
fn visible_start(cursor: usize, width: usize) -> usize {
    cursor.saturating_sub(width.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::visible_start;

    #[test]
    fn no_scroll_when_cursor_fits() {
        assert_eq!(visible_start(5, 10), 0);
        assert_eq!(visible_start(9, 10), 0);
    }

    #[test]
    fn scrolls_to_keep_cursor_on_last_cell() {
        assert_eq!(visible_start(10, 10), 1);
        assert_eq!(visible_start(25, 10), 16);
    }
}
