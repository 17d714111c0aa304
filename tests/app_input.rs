//! Key and mouse handling on top of the panel.

mod common;

use common::*;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use hookpanel::ui::app::Button;
use hookpanel::ui::input::{handle_key, handle_mouse};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn button_center(app: &hookpanel::ui::app::App, button: Button) -> (u16, u16) {
    let layout = app.layout().expect("layout applied");
    let (_, rect) = layout
        .buttons
        .iter()
        .find(|(b, _)| *b == button)
        .copied()
        .expect("button laid out");
    (rect.x + rect.width / 2, rect.y)
}

#[test]
fn key_bindings_drive_panel() {
    let (mut app, _) = make_app();
    handle_key(&mut app, key(KeyCode::Char('a')));
    handle_key(&mut app, key(KeyCode::Char('+')));
    handle_key(&mut app, key(KeyCode::Char('d')));
    handle_key(&mut app, key(KeyCode::Char('d')));
    handle_key(&mut app, key(KeyCode::Char('i')));
    assert_eq!(app.panel().count(), 2);
    assert_eq!(app.panel().reducer_count(), -1);
}

#[test]
fn key_release_is_ignored() {
    let (mut app, _) = make_app();
    let mut release = key(KeyCode::Char('a'));
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release);
    assert_eq!(app.panel().count(), 0);
}

#[test]
fn q_and_ctrl_q_quit() {
    let (mut app, _) = make_app();
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let (mut app, _) = make_app();
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());
}

#[test]
fn typing_goes_to_focused_input() {
    let (mut app, _) = make_app();
    handle_key(&mut app, key(KeyCode::Char('f')));
    assert!(app.panel().input().focused);

    for ch in "add".chars() {
        handle_key(&mut app, key(KeyCode::Char(ch)));
    }
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.panel().input().text, "ad");
    // Letters were text, not bindings.
    assert_eq!(app.panel().count(), 0);
    assert_eq!(app.panel().reducer_count(), 0);

    handle_key(&mut app, key(KeyCode::Esc));
    assert!(!app.panel().input().focused);
    assert!(!app.should_quit());
}

#[test]
fn ctrl_q_quits_while_editing() {
    let (mut app, _) = make_app();
    handle_key(&mut app, key(KeyCode::Char('f')));
    handle_key(&mut app, ctrl('q'));
    assert!(app.should_quit());
}

#[test]
fn clicking_buttons_presses_them() {
    let (mut app, _) = make_app();
    let (x, y) = button_center(&app, Button::Add);
    handle_mouse(&mut app, click(x, y));
    handle_mouse(&mut app, click(x, y));
    let (x, y) = button_center(&app, Button::ReducerDecrement);
    handle_mouse(&mut app, click(x, y));
    assert_eq!(app.panel().count(), 2);
    assert_eq!(app.panel().reducer_count(), -1);
}

#[test]
fn clicking_focus_button_focuses_input() {
    let (mut app, _) = make_app();
    let (x, y) = button_center(&app, Button::FocusInput);
    handle_mouse(&mut app, click(x, y));
    assert!(app.panel().input().focused);
}

#[test]
fn clicking_elsewhere_blurs_input() {
    let (mut app, _) = make_app();
    app.press(Button::FocusInput);
    handle_mouse(&mut app, click(0, 0));
    assert!(!app.panel().input().focused);
}

#[test]
fn clicking_button_while_editing_blurs_then_presses() {
    let (mut app, _) = make_app();
    app.press(Button::FocusInput);
    let (x, y) = button_center(&app, Button::Add);
    handle_mouse(&mut app, click(x, y));
    assert!(!app.panel().input().focused);
    assert_eq!(app.panel().count(), 1);
}

#[test]
fn resize_event_updates_viewport() {
    let (mut app, _) = make_app();
    app.on_resize(1024, 768);
    assert_eq!(app.panel().viewport().to_string(), "1024 x 768");
}
