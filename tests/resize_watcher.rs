//! SIGWINCH subscription lifecycle.

#![cfg(unix)]

use hookpanel::ui::events::AppEvent;
use hookpanel::ui::resize::ResizeWatcher;
use signal_hook::consts::signal::SIGWINCH;
use std::sync::mpsc;
use std::time::Duration;

fn next_resize(rx: &mpsc::Receiver<AppEvent>) -> Option<(u16, u16)> {
    match rx.recv_timeout(Duration::from_secs(2)) {
        Ok(AppEvent::Resize(cols, rows)) => Some((cols, rows)),
        _ => None,
    }
}

#[test]
fn delivers_queried_size_on_sigwinch() {
    let (tx, rx) = mpsc::channel();
    let watcher = ResizeWatcher::start(tx, || Some((1024, 768)))
        .unwrap()
        .expect("watcher on unix");
    assert!(watcher.is_active());

    signal_hook::low_level::raise(SIGWINCH).unwrap();
    assert_eq!(next_resize(&rx), Some((1024, 768)));

    watcher.stop();
}

#[test]
fn stop_releases_the_sender() {
    let (tx, rx) = mpsc::channel();
    let watcher = ResizeWatcher::start(tx, || Some((80, 24)))
        .unwrap()
        .expect("watcher on unix");
    watcher.stop();

    // The watcher thread owned the only sender; once it is joined the
    // channel reports disconnection instead of waiting.
    loop {
        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(AppEvent::Resize(..)) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Ok(_) | Err(mpsc::RecvTimeoutError::Timeout) => {
                panic!("expected channel to disconnect after stop")
            }
        }
    }
}

#[test]
fn drop_deregisters_listener() {
    let (tx, rx) = mpsc::channel();
    {
        let _watcher = ResizeWatcher::start(tx, || Some((80, 24))).unwrap();
    }
    loop {
        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(_) => continue,
            Err(err) => {
                assert_eq!(err, mpsc::RecvTimeoutError::Disconnected);
                break;
            }
        }
    }
}
