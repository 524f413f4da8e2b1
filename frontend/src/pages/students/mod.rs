use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{SearchBox, StudentsPanel};

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! { <StudentsPanel /> }
}
