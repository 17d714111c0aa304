//! Viewport resize subscription.
//!
//! Registered once when the panel mounts and released exactly once when it
//! unmounts, either through [`ResizeWatcher::stop`] or on drop.

use crate::ui::events::AppEvent;
use std::io;
use std::sync::mpsc::Sender;

#[cfg(unix)]
use signal_hook::consts::signal::SIGWINCH;
#[cfg(unix)]
use signal_hook::iterator::Signals;
#[cfg(unix)]
use std::thread;

pub struct ResizeWatcher {
    #[cfg(unix)]
    handle: signal_hook::iterator::Handle,
    #[cfg(unix)]
    thread: Option<thread::JoinHandle<()>>,
}

impl ResizeWatcher {
    /// Listen for SIGWINCH and send `AppEvent::Resize` with whatever `query`
    /// reports. Returns `None` on platforms without SIGWINCH.
    pub fn start<F>(sender: Sender<AppEvent>, query: F) -> io::Result<Option<Self>>
    where
        F: Fn() -> Option<(u16, u16)> + Send + 'static,
    {
        #[cfg(unix)]
        {
            let mut signals = Signals::new([SIGWINCH])?;
            let handle = signals.handle();
            let thread = thread::Builder::new()
                .name("resize-watcher".to_string())
                .spawn(move || {
                    for _ in signals.forever() {
                        let Some((cols, rows)) = query() else {
                            continue;
                        };
                        if sender.send(AppEvent::Resize(cols, rows)).is_err() {
                            break;
                        }
                    }
                })?;
            tracing::debug!("Resize listener registered");
            Ok(Some(Self {
                handle,
                thread: Some(thread),
            }))
        }

        #[cfg(not(unix))]
        {
            let _ = sender;
            let _ = query;
            Ok(None)
        }
    }

    /// Deregister the listener and wait for its thread.
    pub fn stop(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        #[cfg(unix)]
        {
            self.thread.is_some()
        }
        #[cfg(not(unix))]
        {
            false
        }
    }

    fn release(&mut self) {
        #[cfg(unix)]
        {
            let Some(thread) = self.thread.take() else {
                return;
            };
            self.handle.close();
            let _ = thread.join();
            tracing::debug!("Resize listener deregistered");
        }
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.release();
    }
}
