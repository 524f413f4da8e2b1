use leptos::*;

pub mod utils;

mod panel;

pub use panel::HomePanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <HomePanel /> }
}
