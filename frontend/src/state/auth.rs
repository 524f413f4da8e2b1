use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role, SignupRequest, UserResponse},
    utils::storage,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    fn signed_in(user: UserResponse) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    fn signed_out() -> Self {
        Self::default()
    }
}

/// Rebuilds the auth state from the persisted session, if any.
pub fn restored_state() -> AuthState {
    match storage::load_session() {
        Some(session) => AuthState::signed_in(session.user),
        None => AuthState::signed_out(),
    }
}

fn create_auth_context(api_client: ApiClient) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(restored_state());

    // Runs once in the browser; confirms the stored token is still accepted.
    create_effect(move |_| {
        if !auth_state.get_untracked().is_authenticated {
            return;
        }
        let api_client = api_client.clone();
        spawn_local(async move {
            verify_session(&api_client, set_auth_state).await;
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let ctx = create_auth_context(api_client);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn verify_session(api_client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    match api_client.get_profile().await {
        Ok(user) => {
            if let Err(err) = storage::save_user(&user) {
                log::warn!("Failed to store refreshed user: {}", err);
            }
            set_auth_state.set(AuthState::signed_in(user));
        }
        Err(err) if err.is_unauthorized() => {
            log::info!("Stored session rejected: {}", err);
            storage::clear_session();
            set_auth_state.set(AuthState::signed_out());
        }
        Err(err) => log::warn!("Could not verify stored session: {}", err),
    }
}

pub async fn login_request(
    request: LoginRequest,
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserResponse, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match api_client.login(&request).await {
        Ok(response) => {
            set_auth_state.set(AuthState::signed_in(response.user.clone()));
            log::info!("Signed in as {}", response.user.email);
            Ok(response.user)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Creates the account, then signs in with the same credentials.
pub async fn signup_request(
    request: SignupRequest,
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserResponse, ApiError> {
    api_client.signup(&request).await?;
    login_request(
        LoginRequest {
            email: request.email,
            password: request.password,
        },
        api_client,
        set_auth_state,
    )
    .await
}

/// Re-reads the signed-in user after a profile change.
pub async fn refresh_user(
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserResponse, ApiError> {
    let user = api_client.get_profile().await?;
    storage::save_user(&user).map_err(ApiError::unknown)?;
    set_auth_state.update(|state| state.user = Some(user.clone()));
    Ok(user)
}

pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::signed_out());
}

fn context_client() -> Rc<ApiClient> {
    Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
}

pub fn use_login_action() -> Action<LoginRequest, Result<UserResponse, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = context_client();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_signup_action() -> Action<SignupRequest, Result<UserResponse, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = context_client();

    create_action(move |request: &SignupRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { signup_request(payload, &api, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();

    create_action(move |_: &()| {
        logout(set_auth);
        async {}
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn user_json() -> serde_json::Value {
        json!({
            "id": "u1",
            "email": "asha@francisxavier.ac.in",
            "name": "Asha Raman",
            "role": "student",
            "rollNumber": "CS2024001",
            "course": "BCA"
        })
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        storage::clear_session();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200)
                .json_body(json!({ "token": "tok-1", "user": user_json() }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(&server.url("/api"));

        let user = login_request(
            LoginRequest {
                email: "asha@francisxavier.ac.in".into(),
                password: "secret1".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap();
        assert_eq!(user.name, "Asha Raman");

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.loading);
        assert!(storage::load_session().is_some());

        logout(set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(storage::load_session().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_clears_loading_flag() {
        storage::clear_session();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(401).json_body(json!({ "error": "Invalid credentials" }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(&server.url("/api"));
        let err = login_request(
            LoginRequest {
                email: "asha@francisxavier.ac.in".into(),
                password: "nope".into(),
            },
            &api,
            set_state,
        )
        .await
        .unwrap_err();
        assert_eq!(err.error, "Invalid credentials");
        assert!(!state.get().loading);
        assert!(!state.get().is_authenticated);
        runtime.dispose();
    }

    #[tokio::test]
    async fn signup_signs_in_with_the_same_credentials() {
        storage::clear_session();
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/signup");
            then.status(201).json_body(json!({ "message": "User created successfully" }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200)
                .json_body(json!({ "token": "tok-2", "user": user_json() }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(&server.url("/api"));
        signup_request(
            SignupRequest {
                email: "asha@francisxavier.ac.in".into(),
                password: "secret1".into(),
                name: "Asha Raman".into(),
                roll_number: None,
                course: None,
            },
            &api,
            set_state,
        )
        .await
        .unwrap();

        let login = server.last_request(POST, "/api/login").unwrap().json.unwrap();
        assert_eq!(login["password"], "secret1");
        assert!(state.get().is_authenticated);
        storage::clear_session();
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_token_signs_the_user_out() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/profile");
            then.status(401).json_body(json!({ "error": "Token has expired" }));
        });
        let stored: UserResponse = serde_json::from_value(user_json()).unwrap();
        storage::save_session("expired", &stored).unwrap();

        let runtime = create_runtime();
        let (state, set_state) = create_signal(restored_state());
        assert!(state.get().is_authenticated);

        let api = ApiClient::new_with_base_url(&server.url("/api"));
        verify_session(&api, set_state).await;
        assert!(!state.get().is_authenticated);
        assert!(storage::load_session().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn refresh_user_updates_stored_snapshot() {
        let server = MockServer::start_async().await;
        let mut renamed = user_json();
        renamed["name"] = json!("Asha R");
        server.mock(|when, then| {
            when.method(GET).path("/api/profile");
            then.status(200).json_body(renamed.clone());
        });
        let stored: UserResponse = serde_json::from_value(user_json()).unwrap();
        storage::save_session("tok", &stored).unwrap();

        let runtime = create_runtime();
        let (state, set_state) = create_signal(restored_state());
        let api = ApiClient::new_with_base_url(&server.url("/api"));
        refresh_user(&api, set_state).await.unwrap();
        assert_eq!(state.get().user.unwrap().name, "Asha R");
        assert_eq!(storage::load_session().unwrap().user.name, "Asha R");
        storage::clear_session();
        runtime.dispose();
    }
}
