use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface">
            <div class="text-center space-y-4">
                <h1 class="text-4xl font-bold text-fg">"404"</h1>
                <p class="text-xl text-fg-muted">"Oops! Page not found"</p>
                <a href="/" class="text-action-primary-bg underline">"Return to Home"</a>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn not_found_links_home() {
        let html = render_to_string(|| view! { <NotFoundPage /> });
        assert!(html.contains("404"));
        assert!(html.contains("href=\"/\""));
    }
}
