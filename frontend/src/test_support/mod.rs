#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

pub mod helpers {
    use crate::api::{Role, Student, UserResponse};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            email: "admin@francisxavier.ac.in".into(),
            name: "Admin User".into(),
            role: Role::Admin,
            roll_number: None,
            course: None,
        }
    }

    pub fn student_user() -> UserResponse {
        UserResponse {
            id: "u-student".into(),
            email: "asha@francisxavier.ac.in".into(),
            name: "Asha Raman".into(),
            role: Role::Student,
            roll_number: Some("CS2024001".into()),
            course: Some("Computer Science".into()),
        }
    }

    pub fn student(id: &str, name: &str, roll: &str, course: &str) -> Student {
        Student {
            id: id.into(),
            name: name.into(),
            email: format!("{}@francisxavier.ac.in", id),
            roll_number: Some(roll.into()),
            course: Some(course.into()),
            role: Role::Student,
            phone: None,
            year: None,
            department: None,
            avatar: None,
            face_registered_at: None,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
