//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! Async handlers send `UiEvent`s to `inbox_tx`; the loop drains `inbox_rx`
//! each iteration alongside terminal input.

mod handlers;
mod inbox;

use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use gate_core::users::UsersClient;
use inbox::{UiEventReceiver, UiEventSender};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, TuiTerminal};
use crate::{render, update};

/// Tick interval while a lookup is in flight or the user is typing.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Tick interval when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Must be driven from inside a tokio runtime: lookups are spawned onto it.
/// The terminal is restored when the runtime is dropped.
pub struct TuiRuntime {
    terminal: TuiTerminal,
    /// Application state.
    pub state: AppState,
    client: UsersClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Takes over the terminal and builds the initial state.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(client: UsersClient, user_id: u64) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let now = Instant::now();
        Ok(Self {
            terminal,
            state: AppState::new(user_id),
            client,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if reading input or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(user_id = self.state.user_id, "login form started");
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render; input is batched until the next tick.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                self.terminal
                    .draw(|frame| render::render(&self.state, frame))
                    .context("Failed to draw frame")?;
                dirty = false;
            }
        }

        tracing::info!(signed_in = self.state.form.user.is_some(), "login form closed");
        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.form.loading
            || self.state.tasks.is_any_running()
            || recent_terminal_activity;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick unless there is already work queued.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            execute_effect(&mut self.state, &self.client, &self.inbox_tx, effect);
        }
    }
}

/// Runs one effect. Async work is spawned and reports back through `tx`.
fn execute_effect(
    state: &mut AppState,
    client: &UsersClient,
    tx: &UiEventSender,
    effect: UiEffect,
) {
    match effect {
        UiEffect::Quit => {
            state.should_quit = true;
        }
        UiEffect::FetchUser { task, id } => {
            let Some(task) = task else {
                return;
            };
            let client = client.clone();
            spawn_task(tx, TaskKind::UserLookup, task, true, move |cancel| {
                handlers::fetch_user(client, id, cancel)
            });
        }
        UiEffect::CancelTask { kind, token } => {
            if let Some(cancel) = token {
                tracing::debug!(?kind, "cancelling task");
                cancel.cancel();
            }
        }
    }
}

/// Spawns an async task with a uniform `TaskStarted`/`TaskCompleted`
/// lifecycle.
fn spawn_task<F, Fut>(tx: &UiEventSender, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
where
    F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
    Fut: Future<Output = UiEvent> + Send + 'static,
{
    let tx = tx.clone();
    let cancel = cancelable.then(CancellationToken::new);
    let started = TaskStarted {
        id,
        cancel: cancel.clone(),
    };
    let _ = tx.send(UiEvent::TaskStarted { kind, started });
    tokio::spawn(async move {
        let inner = f(cancel).await;
        let completed = TaskCompleted {
            id,
            result: Box::new(inner),
        };
        let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
    });
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
