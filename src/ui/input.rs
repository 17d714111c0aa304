use crate::ui::app::{App, Button};
use crate::ui::input_field::InputIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.panel().input().focused {
        handle_input_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('a') | KeyCode::Char('+') => app.press(Button::Add),
        KeyCode::Char('i') => app.press(Button::ReducerIncrement),
        KeyCode::Char('d') => app.press(Button::ReducerDecrement),
        KeyCode::Char('f') => app.press(Button::FocusInput),
        _ => {}
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    let panel = app.panel_mut();
    match key.code {
        KeyCode::Esc | KeyCode::Tab => panel.blur_input(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            panel.edit_input(InputIntent::Insert(ch))
        }
        KeyCode::Backspace => panel.edit_input(InputIntent::Backspace),
        KeyCode::Left => panel.edit_input(InputIntent::MoveLeft),
        KeyCode::Right => panel.edit_input(InputIntent::MoveRight),
        KeyCode::Home => panel.edit_input(InputIntent::Home),
        KeyCode::End => panel.edit_input(InputIntent::End),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
