//! The process-wide store handle. Created once in `main` and passed to views
//! as a prop rather than looked up from context.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use attendance_core::state::{AppState, LoadFlags};
use attendance_core::update_worker::UnregisterOutcome;
use leptos::{
    create_rw_signal, RwSignal, Signal, SignalSet, SignalUpdate, SignalWith, SignalWithUntracked,
};

#[derive(Clone, Copy)]
pub struct AppStore {
    state: RwSignal<AppState>,
    update_worker: RwSignal<Option<UnregisterOutcome>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(AppState::new()),
            update_worker: create_rw_signal(None),
        }
    }

    /// Tracked.
    pub fn initial_loaded(self) -> bool {
        self.state.with(AppState::initial_loaded)
    }

    /// Tracked.
    pub fn is_authenticated(self) -> bool {
        self.state.with(AppState::is_authenticated)
    }

    /// Tracked read of both flags.
    pub fn flags(self) -> LoadFlags {
        self.state.with(AppState::flags)
    }

    pub fn mark_loaded(self) {
        if !self.state.with_untracked(AppState::initial_loaded) {
            self.state.update(|state| {
                state.mark_loaded();
            });
        }
    }

    pub fn set_authenticated(self, is_authenticated: bool) {
        if self.state.with_untracked(AppState::is_authenticated) != is_authenticated {
            self.state.update(|state| {
                state.set_authenticated(is_authenticated);
            });
        }
    }

    pub fn update_worker(self) -> Signal<Option<UnregisterOutcome>> {
        self.update_worker.into()
    }

    pub fn record_update_worker(self, outcome: UnregisterOutcome) {
        self.update_worker.set(Some(outcome));
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
