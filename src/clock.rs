//! Browser wall clock.

use js_sys::Date;

/// Local calendar day as `YYYY-MM-DD`.
pub fn today() -> String {
    let now = Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

pub fn now_iso() -> String {
    Date::new_0().to_iso_string().into()
}
