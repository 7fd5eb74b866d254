/// Snapshot of the two flags the loading view waits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadFlags {
    pub initial_loaded: bool,
    pub is_authenticated: bool,
}

impl LoadFlags {
    #[must_use]
    pub const fn new(initial_loaded: bool, is_authenticated: bool) -> Self {
        Self {
            initial_loaded,
            is_authenticated,
        }
    }
}

/// Application-wide flags owned by the store.
///
/// `initial_loaded` is monotonic: once [`AppState::mark_loaded`] has run there
/// is no way back to the loading state for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    initial_loaded: bool,
    is_authenticated: bool,
}

impl AppState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_loaded: false,
            is_authenticated: false,
        }
    }

    #[must_use]
    pub const fn initial_loaded(&self) -> bool {
        self.initial_loaded
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub const fn flags(&self) -> LoadFlags {
        LoadFlags::new(self.initial_loaded, self.is_authenticated)
    }

    /// Returns `true` only for the call that performed the transition.
    pub fn mark_loaded(&mut self) -> bool {
        let changed = !self.initial_loaded;
        self.initial_loaded = true;
        changed
    }

    /// Returns whether the value changed.
    pub fn set_authenticated(&mut self, is_authenticated: bool) -> bool {
        let changed = self.is_authenticated != is_authenticated;
        self.is_authenticated = is_authenticated;
        changed
    }
}
