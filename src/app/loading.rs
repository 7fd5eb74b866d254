use crate::app::styles::{LOADER_COLOR, LOADER_SIZE_PX};
use crate::store::AppStore;
use attendance_core::redirect::{Navigator, RedirectMachine, RedirectPolicy};
use leptos::{component, create_effect, view, IntoView};
use leptos_router::{use_navigate, NavigateOptions};

/// Spinner shown until the store resolves, then a one-time replace-redirect.
#[component]
pub fn InitialLoading(store: AppStore, policy: RedirectPolicy) -> impl IntoView {
    let navigate = use_navigate();
    install_redirect(store, policy, move |path: &str| navigate(path, replace_options()));

    view! {
        <div class="initial-loading__section">
            <PulseLoader/>
        </div>
    }
}

/// Re-runs on every change of either flag; the machine decides whether to navigate.
pub fn install_redirect<N>(store: AppStore, policy: RedirectPolicy, navigator: N)
where
    N: Navigator + 'static,
{
    let machine = std::cell::RefCell::new(RedirectMachine::new(policy));
    create_effect(move |_| {
        machine.borrow_mut().drive(store.flags(), &navigator);
    });
}

pub fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

#[component]
fn PulseLoader() -> impl IntoView {
    let dot_style = format!(
        "width: {LOADER_SIZE_PX}px; height: {LOADER_SIZE_PX}px; background: {LOADER_COLOR};"
    );
    view! {
        <div class="pulse-loader" role="status" aria-label="Loading">
            {(0..3)
                .map(|i| {
                    let style = format!("{dot_style} animation-delay: {}ms;", i * 120);
                    view! { <span class="pulse-loader__dot" style=style></span> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
