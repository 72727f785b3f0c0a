//! Input relay: moves blocking terminal reads off the game loop.
//!
//! A dedicated OS thread blocks on the event source and forwards every event
//! into a bounded channel. The loop `select!`s on that channel next to its
//! tick timer, so a slow read never delays a frame.
//!
//! The thread is detached. It ends on its own when the source fails or the
//! receiver is dropped; otherwise process exit reclaims it.

use std::io;
use std::thread;

use crossterm::event::{self, Event};
use tokio::sync::mpsc;

use crate::types::INPUT_QUEUE_CAPACITY;

/// Spawn a relay over the real terminal (`crossterm::event::read`).
pub fn spawn_terminal_relay() -> io::Result<mpsc::Receiver<Event>> {
    spawn_relay(event::read, INPUT_QUEUE_CAPACITY)
}

/// Spawn a relay thread over an arbitrary blocking event source.
///
/// `capacity` is clamped to at least 1.
pub fn spawn_relay<F>(mut read: F, capacity: usize) -> io::Result<mpsc::Receiver<Event>>
where
    F: FnMut() -> io::Result<Event> + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Event>(capacity.max(1));
    thread::Builder::new()
        .name("input-relay".into())
        .spawn(move || loop {
            let event = match read() {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!("input relay: read failed: {}", e);
                    return;
                }
            };
            if tx.blocking_send(event).is_err() {
                tracing::debug!("input relay: receiver dropped");
                return;
            }
        })?;
    Ok(rx)
}
