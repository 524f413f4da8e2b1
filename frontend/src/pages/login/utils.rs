use crate::api::LoginRequest;
use leptos::*;

pub const COLLEGE_EMAIL_DOMAIN: &str = "@francisxavier.ac.in";

pub fn is_college_email(email: &str) -> bool {
    let email = email.trim().to_ascii_lowercase();
    email.len() > COLLEGE_EMAIL_DOMAIN.len() && email.ends_with(COLLEGE_EMAIL_DOMAIN)
}

pub fn email_domain_error() -> String {
    format!("Only {} email addresses are allowed.", COLLEGE_EMAIL_DOMAIN)
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        validate_credentials(&self.email.get_untracked(), &self.password.get_untracked())
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, String> {
    if !is_college_email(email) {
        return Err(email_domain_error());
    }
    if password.is_empty() {
        return Err("Please enter your password.".into());
    }
    Ok(LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}
