use super::*;
use attendance_core::attendance::AttendanceTime;
use leptos::create_runtime;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Default)]
struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        if self.reject_writes.get() {
            return Err("QuotaExceededError".to_string());
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        if self.reject_writes.get() {
            return Err("SecurityError".to_string());
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

fn session() -> (Session, Rc<MemoryStorage>) {
    let storage = Rc::new(MemoryStorage::default());
    let session = Session::with_storage("test.session", storage.clone());
    (session, storage)
}

#[test]
fn persist_then_clear_toggles_marker() {
    let (session, _) = session();
    assert!(!session.is_present());
    session.persist();
    assert!(session.is_present());
    session.clear();
    assert!(!session.is_present());
}

#[test]
fn failed_clear_keeps_marker() {
    let (session, storage) = session();
    session.persist();
    storage.reject_writes.set(true);

    session.clear();

    assert!(session.is_present());
}

#[test]
fn attendance_is_kept_under_its_own_key() {
    let (session, storage) = session();
    let mut attendance = Attendance::new("2026-10-19");
    attendance.punch(AttendanceTime::at("2026-10-19T09:00:00Z"));

    session.save_attendance(&attendance);

    assert!(storage.items.borrow().contains_key("test.session.attendance"));
    assert!(!session.is_present());
    assert_eq!(session.load_attendance(), Some(attendance));
}

#[test]
fn unreadable_attendance_is_discarded() {
    let (session, storage) = session();
    storage
        .items
        .borrow_mut()
        .insert("test.session.attendance".to_string(), "{not json".to_string());

    assert_eq!(session.load_attendance(), None);
}

#[test]
fn restore_sets_auth_before_loading() {
    let runtime = create_runtime();

    let (signed_in, _) = session();
    signed_in.persist();
    let store = AppStore::new();
    signed_in.restore_into(store);
    assert!(store.initial_loaded());
    assert!(store.is_authenticated());

    let (signed_out, _) = session();
    let store = AppStore::new();
    signed_out.restore_into(store);
    assert!(store.initial_loaded());
    assert!(!store.is_authenticated());

    runtime.dispose();
}
