use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Render,
    Redirect(&'static str),
}

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const STUDENT_ONLY: &[Role] = &[Role::Student];

/// Where a user lands when a page is not meant for their role.
pub fn home_for(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Student => "/",
    }
}

/// `allowed == None` admits every signed-in user.
pub fn guard_decision(state: &AuthState, allowed: Option<&[Role]>) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    let user = match (&state.user, state.is_authenticated) {
        (Some(user), true) => user,
        _ => return GuardDecision::Redirect("/login"),
    };
    match allowed {
        Some(roles) if !roles.contains(&user.role) => GuardDecision::Redirect(home_for(user.role)),
        _ => GuardDecision::Render,
    }
}

#[component]
pub fn RequireRole(
    #[prop(optional)] allowed: Option<&'static [Role]>,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| guard_decision(&auth.get(), allowed));
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            utils::redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, student_user};

    fn signed_in(user: crate::api::UserResponse) -> AuthState {
        AuthState {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    #[test]
    fn guard_waits_while_loading() {
        let state = AuthState {
            loading: true,
            ..AuthState::default()
        };
        assert_eq!(guard_decision(&state, None), GuardDecision::Loading);
    }

    #[test]
    fn guard_sends_anonymous_users_to_login() {
        assert_eq!(
            guard_decision(&AuthState::default(), None),
            GuardDecision::Redirect("/login")
        );
        assert_eq!(
            guard_decision(&AuthState::default(), Some(ADMIN_ONLY)),
            GuardDecision::Redirect("/login")
        );
    }

    #[test]
    fn guard_sends_wrong_role_to_their_home() {
        assert_eq!(
            guard_decision(&signed_in(student_user()), Some(ADMIN_ONLY)),
            GuardDecision::Redirect("/")
        );
        assert_eq!(
            guard_decision(&signed_in(admin_user()), Some(STUDENT_ONLY)),
            GuardDecision::Redirect("/admin")
        );
    }

    #[test]
    fn guard_renders_allowed_roles() {
        assert_eq!(
            guard_decision(&signed_in(admin_user()), Some(ADMIN_ONLY)),
            GuardDecision::Render
        );
        assert_eq!(
            guard_decision(&signed_in(student_user()), None),
            GuardDecision::Render
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, student_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn require_role_renders_children_for_allowed_user() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <RequireRole allowed=ADMIN_ONLY><div>"secret"</div></RequireRole> }
        });
        assert!(html.contains("secret"));
    }

    #[test]
    fn require_role_hides_children_for_other_roles() {
        let html = render_to_string(move || {
            provide_auth(Some(student_user()));
            view! { <RequireRole allowed=ADMIN_ONLY><div>"secret"</div></RequireRole> }
        });
        assert!(!html.contains("secret"));
    }

    #[test]
    fn require_role_shows_spinner_while_loading() {
        let html = render_to_string(move || {
            let (_auth, set_auth) = provide_auth(None);
            set_auth.update(|state| state.loading = true);
            view! { <RequireRole><div>"secret"</div></RequireRole> }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("secret"));
    }
}
