#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use crate::state::LoadFlags;
use serde::{Deserialize, Serialize};

/// Where the loading view sends the user once the app has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    SignIn,
}

impl Destination {
    pub const HOME_PATH: &'static str = "/home";
    /// Relative on purpose: resolved against the route the loading view is mounted on.
    pub const SIGN_IN_PATH: &'static str = "signin";

    #[must_use]
    pub const fn for_auth(is_authenticated: bool) -> Self {
        if is_authenticated {
            Self::Home
        } else {
            Self::SignIn
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => Self::HOME_PATH,
            Self::SignIn => Self::SIGN_IN_PATH,
        }
    }

    /// Issues the replace-navigation for this destination.
    pub fn navigate<N: Navigator + ?Sized>(self, navigator: &N) {
        log::info!("initial load resolved, replacing route with '{}'", self.path());
        navigator.replace(self.path());
    }
}

/// Something that can swap the current history entry for `path`.
pub trait Navigator {
    fn replace(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn replace(&self, path: &str) {
        self(path);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectState {
    #[default]
    Loading,
    RedirectedHome,
    RedirectedSignin,
}

impl RedirectState {
    #[must_use]
    pub const fn destination(self) -> Option<Destination> {
        match self {
            Self::Loading => None,
            Self::RedirectedHome => Some(Destination::Home),
            Self::RedirectedSignin => Some(Destination::SignIn),
        }
    }

    const fn redirected_to(destination: Destination) -> Self {
        match destination {
            Destination::Home => Self::RedirectedHome,
            Destination::SignIn => Self::RedirectedSignin,
        }
    }
}

/// What happens when `is_authenticated` flips after a redirect was issued
/// while the loading view is still mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectPolicy {
    /// Redirect once; later auth changes are ignored.
    #[default]
    Latch,
    /// Redirect again whenever the applicable destination changes.
    FollowAuth,
}

/// Decides, per observed [`LoadFlags`], whether a navigation is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectMachine {
    state: RedirectState,
    policy: RedirectPolicy,
}

impl RedirectMachine {
    #[must_use]
    pub const fn new(policy: RedirectPolicy) -> Self {
        Self {
            state: RedirectState::Loading,
            policy,
        }
    }

    #[must_use]
    pub const fn state(&self) -> RedirectState {
        self.state
    }

    /// Feeds one observation and returns the destination to navigate to, if any.
    pub fn observe(&mut self, flags: LoadFlags) -> Option<Destination> {
        if !flags.initial_loaded {
            return None;
        }

        let target = Destination::for_auth(flags.is_authenticated);
        if let Some(current) = self.state.destination() {
            if current == target {
                return None;
            }
            if self.policy == RedirectPolicy::Latch {
                log::debug!(
                    "auth changed to {target:?} after redirecting to {current:?}; latched, ignoring"
                );
                return None;
            }
        }

        self.state = RedirectState::redirected_to(target);
        Some(target)
    }

    /// [`RedirectMachine::observe`] followed by the navigation it asks for.
    pub fn drive<N: Navigator + ?Sized>(
        &mut self,
        flags: LoadFlags,
        navigator: &N,
    ) -> Option<Destination> {
        let destination = self.observe(flags)?;
        destination.navigate(navigator);
        Some(destination)
    }
}

impl Default for RedirectMachine {
    fn default() -> Self {
        Self::new(RedirectPolicy::default())
    }
}
