use leptos::*;

pub mod utils;

mod panel;

pub use panel::{AttendanceGrid, AttendancePanel};

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! { <AttendancePanel /> }
}
