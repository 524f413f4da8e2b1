use super::utils::SignupFormState;
use crate::api::{ApiError, SignupRequest, UserResponse};
use crate::state::auth;
use crate::utils;
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignupViewModel {
    pub form: SignupFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub signup_action: Action<SignupRequest, Result<UserResponse, ApiError>>,
}

impl SignupViewModel {
    pub fn submit(&self) {
        if self.signup_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.signup_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(ApiError::validation(msg))),
        }
    }
}

pub fn use_signup_view_model() -> SignupViewModel {
    let form = SignupFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let signup_action = auth::use_signup_action();

    create_effect(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(_) => utils::redirect_to("/"),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SignupViewModel {
        form,
        error,
        signup_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn submit_reports_password_mismatch() {
        with_runtime(|| {
            let vm = use_signup_view_model();
            vm.form.name.set("Asha".into());
            vm.form.email.set("asha@francisxavier.ac.in".into());
            vm.form.password.set("secret1".into());
            vm.form.confirm_password.set("secret2".into());
            vm.submit();
            assert_eq!(
                vm.error.get().map(|e| e.error),
                Some("Passwords do not match. Please try again.".into())
            );
            assert_eq!(vm.signup_action.version().get(), 0);
        });
    }
}
