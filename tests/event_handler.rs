//! Input thread shutdown reporting.

use hookpanel::ui::events::{AppEvent, EventHandler};
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

#[test]
fn stopped_input_thread_is_announced() {
    let events = EventHandler::new(Duration::from_millis(10), false);
    let deadline = Instant::now() + Duration::from_secs(5);

    while Instant::now() < deadline {
        match events.next(Duration::from_millis(50)) {
            Ok(AppEvent::InputClosed) | Err(RecvTimeoutError::Disconnected) => return,
            // Attached to a real terminal: the reader is alive and ticking.
            Ok(AppEvent::Tick) => return,
            Ok(_) | Err(RecvTimeoutError::Timeout) => {}
        }
    }
    panic!("input thread went quiet without sending InputClosed");
}

#[test]
fn input_closed_is_delivered_through_sender() {
    let events = EventHandler::new(Duration::from_secs(60), false);
    events.sender().send(AppEvent::InputClosed).unwrap();

    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if let Ok(AppEvent::InputClosed) = events.next(Duration::from_millis(50)) {
            return;
        }
    }
    panic!("InputClosed never reached the receiver");
}
