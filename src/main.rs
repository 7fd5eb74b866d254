mod app;
mod clock;
mod host;
mod service_worker;
mod session;
mod store;

use attendance_core::bootstrap::Bootstrapper;
use attendance_core::config::AppConfig;
use host::BrowserHost;
use store::AppStore;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = host::load_config()
        .map_or_else(|e| (AppConfig::default(), Some(e)), |config| (config, None));
    let level = config.log_level().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    if let Some(e) = config_error {
        log::warn!("ignoring #{}: {e}; using defaults", AppConfig::ELEMENT_ID);
    }

    let store = AppStore::new();
    let session = session::Session::new(&config.session_key);
    let mut host = BrowserHost::new(store, config.redirect_policy, session.clone());

    if let Err(e) = Bootstrapper::new(&config).run(&mut host) {
        log::error!("bootstrap failed: {e}");
        wasm_bindgen::throw_str(&e.to_string());
    }

    session.restore_into(store);
}
