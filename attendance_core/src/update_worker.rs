use std::fmt;

/// Completion signal of unregistering the offline update-caching worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnregisterOutcome {
    /// Number of registrations whose `unregister()` resolved to `true`.
    Unregistered(usize),
    /// The host has no service worker container (insecure context, old browser).
    Unsupported,
    Failed(String),
}

impl UnregisterOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for UnregisterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unregistered(0) => write!(f, "no update worker registered"),
            Self::Unregistered(1) => write!(f, "unregistered 1 update worker"),
            Self::Unregistered(n) => write!(f, "unregistered {n} update workers"),
            Self::Unsupported => write!(f, "update workers unsupported by host"),
            Self::Failed(reason) => write!(f, "update worker unregistration failed: {reason}"),
        }
    }
}
