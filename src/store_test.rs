use super::*;
use crate::app::loading::{install_redirect, replace_options};
use attendance_core::redirect::RedirectPolicy;
use leptos::{create_effect, create_runtime};
use std::cell::RefCell;
use std::rc::Rc;

/// Installs the loading view's redirect over `store` and returns the paths
/// it replaces the route with.
fn recorded_redirects(store: AppStore, policy: RedirectPolicy) -> Rc<RefCell<Vec<String>>> {
    let replaced = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&replaced);
    install_redirect(store, policy, move |path: &str| {
        sink.borrow_mut().push(path.to_string());
    });
    replaced
}

fn paths(replaced: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
    replaced.borrow().clone()
}

#[test]
fn no_redirect_before_initial_load() {
    let runtime = create_runtime();
    for policy in [RedirectPolicy::Latch, RedirectPolicy::FollowAuth] {
        let store = AppStore::new();
        let replaced = recorded_redirects(store, policy);

        store.set_authenticated(true);
        store.set_authenticated(false);

        assert!(paths(&replaced).is_empty());
    }
    runtime.dispose();
}

#[test]
fn authenticated_load_redirects_home_once() {
    let runtime = create_runtime();
    for policy in [RedirectPolicy::Latch, RedirectPolicy::FollowAuth] {
        let store = AppStore::new();
        let replaced = recorded_redirects(store, policy);

        store.set_authenticated(true);
        store.mark_loaded();
        store.mark_loaded();

        assert_eq!(paths(&replaced), vec!["/home".to_string()]);
    }
    runtime.dispose();
}

#[test]
fn unauthenticated_load_redirects_to_signin_once() {
    let runtime = create_runtime();
    for policy in [RedirectPolicy::Latch, RedirectPolicy::FollowAuth] {
        let store = AppStore::new();
        let replaced = recorded_redirects(store, policy);

        store.mark_loaded();
        store.set_authenticated(false);

        assert_eq!(paths(&replaced), vec!["signin".to_string()]);
    }
    runtime.dispose();
}

#[test]
fn auth_flip_after_load_follows_policy() {
    let runtime = create_runtime();

    let latched = AppStore::new();
    let latched_paths = recorded_redirects(latched, RedirectPolicy::Latch);
    latched.mark_loaded();
    latched.set_authenticated(true);
    assert_eq!(paths(&latched_paths), vec!["signin".to_string()]);

    let following = AppStore::new();
    let following_paths = recorded_redirects(following, RedirectPolicy::FollowAuth);
    following.mark_loaded();
    following.set_authenticated(true);
    assert_eq!(
        paths(&following_paths),
        vec!["signin".to_string(), "/home".to_string()]
    );

    runtime.dispose();
}

#[test]
fn unchanged_writes_do_not_notify() {
    let runtime = create_runtime();
    let store = AppStore::new();
    let runs = Rc::new(RefCell::new(0_u32));
    let counter = Rc::clone(&runs);
    create_effect(move |_| {
        let _ = store.flags();
        *counter.borrow_mut() += 1;
    });
    let initial = *runs.borrow();

    store.set_authenticated(false);
    store.mark_loaded();
    store.mark_loaded();
    store.set_authenticated(true);
    store.set_authenticated(true);

    assert_eq!(*runs.borrow() - initial, 2);
    assert!(store.initial_loaded());
    assert!(store.is_authenticated());
    runtime.dispose();
}

#[test]
fn redirects_replace_the_history_entry() {
    assert!(replace_options().replace);
}

#[test]
fn records_update_worker_outcome() {
    let runtime = create_runtime();
    let store = AppStore::new();
    let outcome = store.update_worker();
    assert_eq!(outcome.with(Clone::clone), None);

    store.record_update_worker(UnregisterOutcome::Unregistered(1));
    assert_eq!(
        outcome.with(Clone::clone),
        Some(UnregisterOutcome::Unregistered(1))
    );
    runtime.dispose();
}
