//! The browser page as a bootstrap [`Host`].

use crate::app::App;
use crate::service_worker;
use crate::session::Session;
use crate::store::AppStore;
use attendance_core::bootstrap::Host;
use attendance_core::config::AppConfig;
use attendance_core::error::{BootError, ConfigError};
use attendance_core::redirect::RedirectPolicy;
use leptos::{document, mount_to, view};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub struct BrowserHost {
    store: AppStore,
    policy: RedirectPolicy,
    session: Session,
}

impl BrowserHost {
    pub const fn new(store: AppStore, policy: RedirectPolicy, session: Session) -> Self {
        Self {
            store,
            policy,
            session,
        }
    }
}

impl Host for BrowserHost {
    type MountPoint = Element;

    fn find_mount_point(&self, id: &str) -> Option<Element> {
        document().get_element_by_id(id)
    }

    fn attach(&mut self, mount: Element) -> Result<(), BootError> {
        let parent = mount
            .dyn_into::<HtmlElement>()
            .map_err(|el| BootError::Host(format!("<{}> is not an HTML element", el.tag_name())))?;

        let store = self.store;
        let policy = self.policy;
        let session = self.session.clone();
        mount_to(parent, move || view! { <App store=store policy=policy session=session/> });
        Ok(())
    }

    fn start_update_worker_unregistration(&mut self) {
        let store = self.store;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = service_worker::unregister_all().await;
            if outcome.is_success() {
                log::info!("{outcome}");
            } else {
                log::warn!("{outcome}");
            }
            store.record_update_worker(outcome);
        });
    }
}

/// Reads the embedded JSON config; a page without one runs on defaults.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let Some(raw) = document()
        .get_element_by_id(AppConfig::ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(AppConfig::default());
    };
    AppConfig::from_json(&raw)
}
