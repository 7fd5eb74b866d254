pub mod loading;
pub mod pages;
pub mod styles;

use crate::session::Session;
use crate::store::AppStore;
use attendance_core::redirect::RedirectPolicy;
use leptos::{component, store_value, view, IntoView, SignalGet};
use leptos_router::{Route, Router, Routes};

use crate::app::loading::InitialLoading;
use crate::app::pages::{Home, SignIn};
use crate::app::styles::APP_STYLES;

#[component]
pub fn App(store: AppStore, policy: RedirectPolicy, session: Session) -> impl IntoView {
    let session = store_value(session);

    view! {
        <style>{APP_STYLES}</style>
        <Router>
            <main class="app-shell" aria-busy=move || (!store.initial_loaded()).to_string()>
                <Routes>
                    <Route path="/" view=move || view! { <InitialLoading store=store policy=policy/> }/>
                    <Route path="/home" view=move || view! { <Home store=store session=session.get_value()/> }/>
                    <Route path="/signin" view=move || view! { <SignIn store=store session=session.get_value()/> }/>
                </Routes>
            </main>
            <UpdateWorkerStatus store=store/>
        </Router>
    }
}

#[component]
fn UpdateWorkerStatus(store: AppStore) -> impl IntoView {
    let outcome = store.update_worker();
    view! {
        <footer class="update-worker-status">
            {move || outcome.get().map(|o| o.to_string()).unwrap_or_default()}
        </footer>
    }
}
