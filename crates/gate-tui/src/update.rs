//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::form::{self, FormAction};
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            // Esc may land before the start notice; cancel the orphan right away.
            let superseded = app.last_lookup != Some(started.id);
            if kind == TaskKind::UserLookup && (!app.form.loading || superseded) {
                return vec![UiEffect::CancelTask {
                    kind,
                    token: started.cancel,
                }];
            }
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "dropping stale task result");
                vec![]
            }
        }
        UiEvent::UserLoaded(result) => {
            match &result {
                Ok(user) => tracing::info!(id = user.id, "login lookup succeeded"),
                Err(error) => tracing::warn!(%error, "login lookup failed"),
            }
            form::handle_lookup_result(&mut app.form, result);
            vec![]
        }
        UiEvent::LookupCancelled => {
            tracing::debug!("login lookup cancelled");
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            form::handle_paste(&mut app.form, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match form::handle_key(&mut app.form, key) {
        FormAction::None => vec![],
        FormAction::Submit => submit(app),
        FormAction::CancelLookup => cancel_lookup(app),
        FormAction::Quit => {
            let mut effects = cancel_lookup(app);
            effects.push(UiEffect::Quit);
            effects
        }
    }
}

fn submit(app: &mut AppState) -> Vec<UiEffect> {
    if !form::begin_submit(&mut app.form) {
        return vec![];
    }
    let task = app.task_seq.next_id();
    app.last_lookup = Some(task);
    tracing::info!(task = task.0, id = app.user_id, "submitting login");
    vec![UiEffect::FetchUser {
        task: Some(task),
        id: app.user_id,
    }]
}

fn cancel_lookup(app: &mut AppState) -> Vec<UiEffect> {
    if !app.form.loading {
        return vec![];
    }
    form::cancel_lookup(&mut app.form);
    let state = app.tasks.state_mut(TaskKind::UserLookup);
    let token = state.cancel.take();
    state.clear();
    vec![UiEffect::CancelTask {
        kind: TaskKind::UserLookup,
        token,
    }]
}
