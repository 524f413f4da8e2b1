use super::view_model::use_signup_view_model;
use crate::components::error::InlineErrorMessage;
use crate::pages::login::utils::COLLEGE_EMAIL_DOMAIN;
use leptos::{ev::SubmitEvent, *};

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                required=required
                class="mt-1 w-full rounded-md border border-border px-3 py-2"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();
    let form = vm.form;
    let pending = vm.signup_action.pending();
    let password_type = move || if form.show_password.get() { "text" } else { "password" };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-lg w-full space-y-6 bg-surface-elevated rounded-lg shadow-sm border border-border p-8">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold text-fg">"Create Account"</h2>
                    <p class="mt-2 text-sm text-fg-muted">"Join the FaceAttend attendance system"</p>
                </div>
                <InlineErrorMessage error=vm.error.into() />
                <form class="space-y-4" on:submit=on_submit>
                    <TextField id="name" label="Full Name" placeholder="Enter your full name" value=form.name required=true />
                    <TextField
                        id="email"
                        label="Email Address"
                        input_type="email"
                        placeholder=format!("your.name{}", COLLEGE_EMAIL_DOMAIN)
                        value=form.email
                        required=true
                    />
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <TextField id="rollNumber" label="Roll Number (optional)" placeholder="CS2024001" value=form.roll_number />
                        <TextField id="course" label="Course (optional)" placeholder="Computer Science" value=form.course />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type=password_type
                            required
                            class="mt-1 w-full rounded-md border border-border px-3 py-2"
                            placeholder="Create a strong password"
                            prop:value=move || form.password.get()
                            on:input=move |ev| form.password.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="confirmPassword" class="block text-sm font-medium text-fg">"Confirm Password"</label>
                        <input
                            id="confirmPassword"
                            name="confirmPassword"
                            type=password_type
                            required
                            class="mt-1 w-full rounded-md border border-border px-3 py-2"
                            placeholder="Confirm your password"
                            prop:value=move || form.confirm_password.get()
                            on:input=move |ev| form.confirm_password.set(event_target_value(&ev))
                        />
                    </div>
                    <label class="flex items-center gap-2 text-sm text-fg-muted">
                        <input
                            type="checkbox"
                            prop:checked=move || form.show_password.get()
                            on:change=move |ev| form.show_password.set(event_target_checked(&ev))
                        />
                        "Show passwords"
                    </label>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "Already have an account? "
                    <a href="/login" class="font-medium text-action-primary-bg hover:underline">"Sign in here"</a>
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
    fn signup_panel_renders_all_fields() {
        let html = render_to_string(|| view! { <SignupPanel /> });
        assert!(html.contains("Full Name"));
        assert!(html.contains("Roll Number (optional)"));
        assert!(html.contains("Confirm Password"));
        assert!(html.contains("href=\"/login\""));
    }
}
