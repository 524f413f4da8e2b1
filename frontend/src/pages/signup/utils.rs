use crate::api::SignupRequest;
use crate::pages::login::utils::{email_domain_error, is_college_email};
use leptos::*;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub roll_number: String,
    pub course: String,
    pub password: String,
    pub confirm_password: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl SignupInput {
    pub fn validate(&self) -> Result<SignupRequest, String> {
        if self.name.trim().is_empty() {
            return Err("Please enter your full name.".into());
        }
        if !is_college_email(&self.email) {
            return Err(email_domain_error());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {} characters long.",
                MIN_PASSWORD_LEN
            ));
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match. Please try again.".into());
        }
        Ok(SignupRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: self.name.trim().to_string(),
            roll_number: optional(&self.roll_number),
            course: optional(&self.course),
        })
    }
}

#[derive(Clone, Copy)]
pub struct SignupFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub roll_number: RwSignal<String>,
    pub course: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            roll_number: create_rw_signal(String::new()),
            course: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
        }
    }
}

impl SignupFormState {
    pub fn snapshot(&self) -> SignupInput {
        SignupInput {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            roll_number: self.roll_number.get_untracked(),
            course: self.course.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }

    pub fn to_request(&self) -> Result<SignupRequest, String> {
        self.snapshot().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SignupInput {
        SignupInput {
            name: "Asha Raman".into(),
            email: "asha@francisxavier.ac.in".into(),
            roll_number: "".into(),
            course: " BCA ".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn valid_input_omits_blank_optionals() {
        let request = valid().validate().unwrap();
        assert!(request.roll_number.is_none());
        assert_eq!(request.course.as_deref(), Some("BCA"));
    }

    #[test]
    fn validation_runs_in_order() {
        let mut input = valid();
        input.name = " ".into();
        input.email = "x@gmail.com".into();
        assert_eq!(input.validate().unwrap_err(), "Please enter your full name.");

        let mut input = valid();
        input.email = "x@gmail.com".into();
        input.password = "123".into();
        assert!(input.validate().unwrap_err().contains("@francisxavier.ac.in"));

        let mut input = valid();
        input.password = "12345".into();
        input.confirm_password = "other".into();
        assert_eq!(
            input.validate().unwrap_err(),
            "Password must be at least 6 characters long."
        );

        let mut input = valid();
        input.confirm_password = "secret2".into();
        assert_eq!(
            input.validate().unwrap_err(),
            "Passwords do not match. Please try again."
        );
    }
}
