//! Unregistering the offline update-caching service worker so the app is
//! always served from the network.

use attendance_core::update_worker::UnregisterOutcome;
use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::ServiceWorkerRegistration;

#[allow(clippy::future_not_send)]
pub async fn unregister_all() -> UnregisterOutcome {
    try_unregister_all().await.unwrap_or_else(|e| {
        UnregisterOutcome::Failed(e.as_string().unwrap_or_else(|| format!("{e:?}")))
    })
}

#[allow(clippy::future_not_send)]
async fn try_unregister_all() -> Result<UnregisterOutcome, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(UnregisterOutcome::Unsupported);
    };
    let navigator = window.navigator();
    // Absent outside secure contexts.
    if !Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))? {
        return Ok(UnregisterOutcome::Unsupported);
    }

    let registrations = JsFuture::from(navigator.service_worker().get_registrations()).await?;
    let registrations: Array = registrations.dyn_into()?;

    let mut unregistered = 0;
    for value in registrations.iter() {
        let registration: ServiceWorkerRegistration = value.dyn_into()?;
        let done = JsFuture::from(registration.unregister()?).await?;
        if done.as_bool().unwrap_or(false) {
            unregistered += 1;
        }
    }
    Ok(UnregisterOutcome::Unregistered(unregistered))
}
