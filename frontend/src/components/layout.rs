use crate::{
    api::Role,
    state::auth::{self, use_auth},
    utils,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem { path: "/", label: "Home" },
    NavItem { path: "/admin", label: "Admin" },
    NavItem { path: "/students", label: "Students" },
    NavItem { path: "/attendance", label: "Attendance" },
    NavItem { path: "/recognition", label: "Face Recognition" },
];

const STUDENT_NAV: &[NavItem] = &[
    NavItem { path: "/", label: "Home" },
    NavItem { path: "/recognition", label: "Face Recognition" },
    NavItem { path: "/profile", label: "Profile" },
];

pub fn nav_items_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Student => STUDENT_NAV,
    }
}

pub fn is_active(item_path: &str, current_path: &str) -> bool {
    let current = current_path.trim_end_matches('/');
    let current = if current.is_empty() { "/" } else { current };
    item_path == current
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "flex items-center px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "flex items-center px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
    }
}

fn use_current_path() -> Signal<String> {
    match use_context::<leptos_router::RouterContext>() {
        Some(router) => {
            let pathname = router.pathname();
            Signal::derive(move || pathname.get())
        }
        None => {
            let path = utils::current_path().unwrap_or_else(|| "/".to_string());
            Signal::derive(move || path.clone())
        }
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let current_path = use_current_path();
    let items = move || {
        auth.get()
            .role()
            .map(nav_items_for)
            .unwrap_or_default()
    };
    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    let logout_action = auth::use_logout_action();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            utils::redirect_to("/login");
        }
    });
    let on_logout = move |_| {
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <Show when=move || auth.get().user.is_some()>
            <nav class="bg-surface-elevated shadow-sm border-b border-border">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <a href="/" class="flex items-center space-x-2">
                            <span class="text-xl font-semibold text-fg">"FaceAttend"</span>
                        </a>
                        <div class="hidden md:flex items-center space-x-2">
                            {move || {
                                let path = current_path.get();
                                items()
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <a href=item.path class=nav_link_class(is_active(item.path, &path))>
                                                {item.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <div class="hidden md:flex items-center space-x-4">
                            <span class="text-sm text-fg-muted">"Welcome, " {user_name}</span>
                            <button
                                on:click=on_logout
                                class="px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            >
                                "Logout"
                            </button>
                        </div>
                        <button
                            type="button"
                            class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                    <Show when=move || menu_open.get()>
                        <div id="mobile-nav" class="md:hidden border-t border-border py-3 space-y-1">
                            {move || {
                                let path = current_path.get();
                                items()
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <a
                                                href=item.path
                                                class=nav_link_class(is_active(item.path, &path))
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {item.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()
                            }}
                            <div class="px-3 py-2 text-sm text-fg-muted">"Welcome, " {user_name}</div>
                            <button
                                on:click=on_logout
                                class="w-full text-left px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            >
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </nav>
        </Show>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Navigation/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Success/error banner pair shared by the forms on a page.
#[derive(Clone, Copy)]
pub struct MessageState {
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl Default for MessageState {
    fn default() -> Self {
        Self {
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }
}

impl MessageState {
    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
        self.success.set(None);
    }

    pub fn set_success(&self, msg: impl Into<String>) {
        self.success.set(Some(msg.into()));
        self.error.set(None);
    }

    pub fn clear(&self) {
        self.error.set(None);
        self.success.set(None);
    }
}

#[component]
pub fn FeedbackBanner(messages: MessageState) -> impl IntoView {
    view! {
        {move || messages.error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
        {move || messages.success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_items_follow_role() {
        let admin: Vec<_> = nav_items_for(Role::Admin).iter().map(|i| i.label).collect();
        assert_eq!(
            admin,
            vec!["Home", "Admin", "Students", "Attendance", "Face Recognition"]
        );
        let student: Vec<_> = nav_items_for(Role::Student).iter().map(|i| i.path).collect();
        assert_eq!(student, vec!["/", "/recognition", "/profile"]);
    }

    #[test]
    fn active_item_matches_exact_path() {
        assert!(is_active("/", "/"));
        assert!(is_active("/", ""));
        assert!(!is_active("/", "/admin"));
        assert!(is_active("/admin", "/admin/"));
        assert!(!is_active("/admin", "/attendance"));
    }
}
