//! Terminal event plumbing and the blocking event loop.
//!
//! Nothing in the planner animates, so the loop sleeps on the next event
//! instead of ticking. When the event source goes away the loop ends.

use std::sync::mpsc::{self, Receiver};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::app::{App, Flow};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// No more events will arrive.
    Closed,
}

pub trait EventSource {
    /// Blocks until the next event. Returns [`AppEvent::Closed`] forever once
    /// the source is exhausted.
    fn next_event(&mut self) -> AppEvent;
}

/// Events delivered over a channel, either from the terminal reader thread
/// or from a test.
pub struct ChannelEvents {
    rx: Receiver<AppEvent>,
}

impl ChannelEvents {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }

    /// Spawns a thread reading crossterm events. The thread exits on a read
    /// error or once the receiving side is dropped.
    pub fn terminal() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                // Windows reports both press and release
                Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => AppEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    warn!(%err, "terminal input closed");
                    break;
                }
            };
            if tx.send(evt).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl EventSource for ChannelEvents {
    fn next_event(&mut self) -> AppEvent {
        self.rx.recv().unwrap_or(AppEvent::Closed)
    }
}

/// Feeds events to `app` until it quits, calling `draw` once up front and
/// again after every change.
pub fn run<S, F, E>(app: &mut App, events: &mut S, mut draw: F) -> Result<(), E>
where
    S: EventSource,
    F: FnMut(&App) -> Result<(), E>,
{
    draw(app)?;
    loop {
        match app.handle_event(events.next_event()) {
            Flow::Quit => return Ok(()),
            Flow::Redraw => draw(app)?,
            Flow::Idle => {}
        }
    }
}
