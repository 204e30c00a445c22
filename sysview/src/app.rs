//! Refresh loop: a fixed tick collects a snapshot, terminal events can quit

use crate::terminal::TerminalSession;
use crate::ui::{self, View};
use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;
use sysview_core::{AppConfig, Snapshot, SystemMonitor};
use tokio::time::MissedTickBehavior;

/// What the loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Redraw,
    Quit,
}

/// Dashboard state between frames
pub struct App {
    monitor: SystemMonitor,
    config: AppConfig,
    snapshot: Option<Snapshot>,
    last_error: Option<String>,
}

impl App {
    pub fn new(monitor: SystemMonitor, config: AppConfig) -> Self {
        Self {
            monitor,
            config,
            snapshot: None,
            last_error: None,
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.config.ui.refresh_interval_ms)
    }

    /// Collect a new snapshot. On failure the previous snapshot stays on
    /// screen and the error goes to the footer until the next success.
    pub fn refresh(&mut self) {
        match self.monitor.refresh() {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Refresh failed: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    pub fn view(&self) -> View<'_> {
        View {
            snapshot: self.snapshot.as_ref(),
            thresholds: &self.config.thresholds,
            show_header: self.config.ui.show_header,
            status: self.last_error.as_deref(),
        }
    }
}

/// Map a terminal event to a loop action
pub fn handle_event(event: &Event) -> Control {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Esc => Control::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            _ => Control::Continue,
        },
        Event::Resize(_, _) => Control::Redraw,
        _ => Control::Continue,
    }
}

/// Run until the user quits
pub async fn run(session: &mut TerminalSession, app: &mut App) -> Result<()> {
    let mut ticker = tokio::time::interval(app.refresh_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut events = EventStream::new();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => app.refresh(),
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => match handle_event(&event) {
                    Control::Quit => break,
                    Control::Redraw => {}
                    Control::Continue => continue,
                },
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            _ = &mut ctrl_c => break,
        }

        session.terminal.draw(|frame| ui::draw(frame, &app.view()))?;
    }

    log::info!("Dashboard loop finished");
    Ok(())
}
