use leptos::*;

pub mod utils;
pub mod view_model;

mod panel;

pub use panel::RecognitionPanel;

#[component]
pub fn RecognitionPage() -> impl IntoView {
    view! { <RecognitionPanel /> }
}
