use super::{utils::COLLEGE_EMAIL_DOMAIN, view_model::use_login_view_model};
use crate::components::error::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;
    let pending = vm.login_action.pending();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8 bg-surface-elevated rounded-lg shadow-sm border border-border p-8">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold text-fg">"Welcome Back"</h2>
                    <p class="mt-2 text-sm text-fg-muted">"Sign in to the FaceAttend attendance system"</p>
                </div>
                <InlineErrorMessage error=vm.error.into() />
                <form class="space-y-6" on:submit=on_submit>
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg">"Email Address"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            class="mt-1 w-full rounded-md border border-border px-3 py-2"
                            placeholder=format!("your.name{}", COLLEGE_EMAIL_DOMAIN)
                            prop:value=move || form.email.get()
                            on:input=move |ev| form.email.set(event_target_value(&ev))
                        />
                        <p class="mt-1 text-xs text-fg-muted">
                            {format!("Only {} addresses are accepted", COLLEGE_EMAIL_DOMAIN)}
                        </p>
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <div class="relative mt-1">
                            <input
                                id="password"
                                name="password"
                                type=move || if form.show_password.get() { "text" } else { "password" }
                                required
                                class="w-full rounded-md border border-border px-3 py-2 pr-16"
                                placeholder="Enter your password"
                                prop:value=move || form.password.get()
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-0 px-3 text-xs text-fg-muted"
                                on:click=move |_| form.show_password.update(|show| *show = !*show)
                            >
                                {move || if form.show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "Don't have an account? "
                    <a href="/signup" class="font-medium text-action-primary-bg hover:underline">"Sign up here"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_form() {
        let html = render_to_string(|| view! { <LoginPanel /> });
        assert!(html.contains("Email Address"));
        assert!(html.contains("Sign In"));
        assert!(html.contains("href=\"/signup\""));
        assert!(html.contains("@francisxavier.ac.in"));
    }
}
