//! Terminal lifecycle and the input-event pump.

use std::io::{Stdout, stdout};
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, enable_raw_mode};
use futures::{FutureExt, StreamExt};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::restore_terminal;

use super::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Ticks drive footer-message expiry; frames cap the redraw rate.
const TICKS_PER_SEC: f64 = 4.0;
const FRAMES_PER_SEC: f64 = 30.0;

pub struct TuiRunner {
    terminal: Tui,
    events: UnboundedReceiver<Event>,
    events_tx: UnboundedSender<Event>,
    pump: Option<JoinHandle<()>>,
    shutdown: CancellationToken,
}

impl TuiRunner {
    pub fn new() -> Result<Self> {
        let (events_tx, events) = mpsc::unbounded_channel();

        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout()))?,
            events,
            events_tx,
            pump: None,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        self.pump = Some(tokio::spawn(pump_events(
            self.events_tx.clone(),
            self.shutdown.clone(),
        )));
        Ok(())
    }

    /// Tears the screen down through the same path the panic hook uses,
    /// so both exits leave the shell in the same state.
    pub fn exit(&mut self) -> Result<()> {
        self.shutdown.cancel();
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
        restore_terminal()
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.events.recv().await
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

async fn pump_events(tx: UnboundedSender<Event>, shutdown: CancellationToken) {
    let mut inputs = EventStream::new();
    let mut ticks = tokio::time::interval(Duration::from_secs_f64(1.0 / TICKS_PER_SEC));
    let mut frames = tokio::time::interval(Duration::from_secs_f64(1.0 / FRAMES_PER_SEC));

    let _ = tx.send(Event::Init);

    loop {
        let event = tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = ticks.tick() => Event::Tick,
            _ = frames.tick() => Event::Render,
            input = inputs.next().fuse() => match input {
                Some(Ok(raw)) => match map_input(raw) {
                    Some(event) => event,
                    None => continue,
                },
                _ => break,
            },
        };

        if tx.send(event).is_err() {
            break;
        }
    }
}

/// Key presses and resizes are the only terminal input this app reads;
/// release events, mouse and focus traffic are dropped here.
fn map_input(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key)
            if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
        {
            Some(Event::Key(key))
        }
        CrosstermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn key_presses_and_resizes_pass_through() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);

        assert!(matches!(
            map_input(CrosstermEvent::Key(key)),
            Some(Event::Key(_))
        ));
        assert!(matches!(
            map_input(CrosstermEvent::Resize(120, 40)),
            Some(Event::Resize(120, 40))
        ));
    }

    #[test]
    fn key_releases_and_focus_changes_are_dropped() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('j'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );

        assert!(map_input(CrosstermEvent::Key(release)).is_none());
        assert!(map_input(CrosstermEvent::FocusGained).is_none());
    }
}
