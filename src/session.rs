//! Local session marker kept in `localStorage`, plus the latest attendance
//! record of that session. The marker's presence at startup is what resolves
//! the authentication flag.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::store::AppStore;
use attendance_core::attendance::Attendance;
use std::rc::Rc;

/// String key/value storage the session lives in.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// `window.localStorage`.
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Self::local()?.get_item(key).map_err(|e| format!("{e:?}"))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        Self::local()?.set_item(key, value).map_err(|e| format!("{e:?}"))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        Self::local()?.remove_item(key).map_err(|e| format!("{e:?}"))
    }
}

#[derive(Clone)]
pub struct Session {
    key: Rc<str>,
    storage: Rc<dyn SessionStorage>,
}

impl Session {
    pub fn new(key: &str) -> Self {
        Self::with_storage(key, Rc::new(BrowserStorage))
    }

    pub fn with_storage(key: &str, storage: Rc<dyn SessionStorage>) -> Self {
        Self {
            key: key.into(),
            storage,
        }
    }

    pub fn is_present(&self) -> bool {
        self.storage.get(&self.key).map_or_else(
            |e| {
                log::warn!("cannot read session '{}': {e}", self.key);
                false
            },
            |marker| marker.is_some(),
        )
    }

    pub fn persist(&self) {
        if let Err(e) = self.storage.set(&self.key, "1") {
            log::warn!("failed to persist session '{}': {e}", self.key);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("failed to clear session '{}': {e}", self.key);
        }
    }

    fn attendance_key(&self) -> String {
        format!("{}.attendance", self.key)
    }

    /// Latest attendance record kept for this session, if any.
    pub fn load_attendance(&self) -> Option<Attendance> {
        let raw = self
            .storage
            .get(&self.attendance_key())
            .map_err(|e| log::warn!("cannot read attendance record: {e}"))
            .ok()
            .flatten()?;
        serde_json::from_str(&raw)
            .map_err(|e| log::warn!("discarding unreadable attendance record: {e}"))
            .ok()
    }

    pub fn save_attendance(&self, attendance: &Attendance) {
        let Ok(raw) = serde_json::to_string(attendance) else {
            return;
        };
        if let Err(e) = self.storage.set(&self.attendance_key(), &raw) {
            log::warn!("failed to persist attendance for {}: {e}", attendance.day);
        }
    }

    /// Completes the initial load: auth first, so the loading view never sees
    /// a loaded state with a stale auth flag.
    pub fn restore_into(&self, store: AppStore) {
        let is_authenticated = self.is_present();
        log::debug!("session '{}' present: {is_authenticated}", self.key);
        store.set_authenticated(is_authenticated);
        store.mark_loaded();
    }
}
