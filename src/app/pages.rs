//! Entry routes the loading view redirects to: today's clock-in/out card on
//! `/home`, and the session switch.

use crate::clock;
use crate::session::Session;
use crate::store::AppStore;
use attendance_core::attendance::{attendance_for_day, Attendance, AttendanceKind, AttendanceTime};
use attendance_core::redirect::Destination;
use leptos::{
    component, create_rw_signal, view, IntoView, SignalGetUntracked, SignalSet, SignalWith,
};
use leptos_router::{use_navigate, NavigateOptions};

#[component]
pub fn Home(store: AppStore, session: Session) -> impl IntoView {
    let attendance = create_rw_signal(attendance_for_day(
        session.load_attendance(),
        &clock::today(),
    ));

    let punch_session = session.clone();
    let punch = move |_| {
        let mut record = attendance_for_day(Some(attendance.get_untracked()), &clock::today());
        let kind = record.punch(AttendanceTime::at(clock::now_iso()));
        log::info!("{kind} recorded for {}", record.day);
        punch_session.save_attendance(&record);
        attendance.set(record);
    };

    let navigate = use_navigate();
    let sign_out = move |_| {
        session.clear();
        store.set_authenticated(false);
        navigate("/signin", NavigateOptions::default());
    };

    view! {
        <section class="entry-page">
            <h1>"Home"</h1>
            <div class="attendance-card">
                <div class="attendance-card__day">{move || attendance.with(|a| a.day.clone())}</div>
                <dl class="attendance-card__times">
                    <dt>{AttendanceKind::ClockIn.to_string()}</dt>
                    <dd>{move || punched_at(attendance.with(|a| a.clocked_in.clone()))}</dd>
                    <dt>{AttendanceKind::ClockOut.to_string()}</dt>
                    <dd>{move || punched_at(attendance.with(|a| a.clocked_out.clone()))}</dd>
                </dl>
                <button
                    class="entry-page__action"
                    disabled=move || !store.is_authenticated()
                    on:click=punch
                >
                    {move || attendance.with(Attendance::next_kind).to_string()}
                </button>
            </div>
            <button class="entry-page__action" on:click=sign_out>"Sign out"</button>
        </section>
    }
}

fn punched_at(time: Option<AttendanceTime>) -> String {
    time.map_or_else(|| "--:--".to_string(), |t| t.pushed_at)
}

#[component]
pub fn SignIn(store: AppStore, session: Session) -> impl IntoView {
    let navigate = use_navigate();
    let sign_in = move |_| {
        session.persist();
        store.set_authenticated(true);
        navigate(Destination::HOME_PATH, NavigateOptions::default());
    };

    view! {
        <section class="entry-page">
            <h1>"Sign in"</h1>
            <button class="entry-page__action" on:click=sign_in>"Sign in"</button>
        </section>
    }
}
