use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// How often the event loop wakes to redraw and advance the countdown
pub const TICK_RATE_MS: u64 = 100;

#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Nothing arrived within one tick period
    Tick,
}

/// Anything that can hand the loop its next input event
pub trait EventSource {
    /// Wait at most `timeout`; `None` when nothing arrived or the source is gone
    fn poll(&self, timeout: Duration) -> Option<AppEvent>;
}

/// Reads the terminal on a background thread and forwards key presses and resizes
pub struct TerminalEvents {
    rx: Receiver<AppEvent>,
}

impl TerminalEvents {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || forward_terminal_events(tx));
        Self { rx }
    }
}

fn forward_terminal_events(tx: Sender<AppEvent>) {
    loop {
        let forwarded = match event::read() {
            // windows reports releases too; only presses are intents
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Ok(Event::Resize(..)) => AppEvent::Resize,
            Ok(_) => continue,
            Err(err) => {
                tracing::error!(%err, "terminal event reader stopped");
                return;
            }
        };
        if tx.send(forwarded).is_err() {
            return;
        }
    }
}

impl EventSource for TerminalEvents {
    fn poll(&self, timeout: Duration) -> Option<AppEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

/// Events fed through a channel, for driving the app without a terminal
pub struct ChannelEvents {
    rx: Receiver<AppEvent>,
}

impl ChannelEvents {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for ChannelEvents {
    fn poll(&self, timeout: Duration) -> Option<AppEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(ev) => Some(ev),
            Err(RecvTimeoutError::Timeout) => None,
            // a closed test channel would otherwise spin without waiting
            Err(RecvTimeoutError::Disconnected) => {
                thread::sleep(timeout);
                None
            }
        }
    }
}

/// Turns an event source into a steady stream of events and ticks
pub struct Runner<E: EventSource> {
    events: E,
    tick_rate: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(events: E, tick_rate: Duration) -> Self {
        Self { events, tick_rate }
    }

    pub fn with_default_rate(events: E) -> Self {
        Self::new(events, Duration::from_millis(TICK_RATE_MS))
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Next input event, or `Tick` once a tick period passes quietly
    pub fn step(&self) -> AppEvent {
        self.events.poll(self.tick_rate).unwrap_or(AppEvent::Tick)
    }
}
