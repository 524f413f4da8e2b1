use crate::api::UserResponse;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read {}", key))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to write {}", key))
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove {}", key))
    }
}

// Host builds have no browser; an in-memory map per thread stands in for localStorage.
#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static ITEMS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        Ok(ITEMS.with(|items| items.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        ITEMS.with(|items| {
            items.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        ITEMS.with(|items| {
            items.borrow_mut().remove(key);
        });
        Ok(())
    }
}

pub use backend::{get_item, remove_item, set_item};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserResponse,
}

pub fn load_token() -> Option<String> {
    get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.trim().is_empty())
}

/// Returns the persisted session, or `None` when the token or the user
/// snapshot is missing or unreadable.
pub fn load_session() -> Option<StoredSession> {
    let token = load_token()?;
    let raw_user = get_item(USER_KEY).ok().flatten()?;
    match serde_json::from_str::<UserResponse>(&raw_user) {
        Ok(user) => Some(StoredSession { token, user }),
        Err(err) => {
            log::warn!("Discarding unreadable stored user: {}", err);
            None
        }
    }
}

pub fn save_session(token: &str, user: &UserResponse) -> Result<(), String> {
    let raw_user =
        serde_json::to_string(user).map_err(|e| format!("Failed to encode user: {}", e))?;
    set_item(TOKEN_KEY, token)?;
    set_item(USER_KEY, &raw_user)
}

pub fn save_user(user: &UserResponse) -> Result<(), String> {
    let raw_user =
        serde_json::to_string(user).map_err(|e| format!("Failed to encode user: {}", e))?;
    set_item(USER_KEY, &raw_user)
}

pub fn clear_session() {
    if let Err(err) = remove_item(TOKEN_KEY).and_then(|_| remove_item(USER_KEY)) {
        log::warn!("Failed to clear stored session: {}", err);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::helpers::student_user;

    #[test]
    fn session_round_trips_through_storage() {
        clear_session();
        assert!(load_session().is_none());

        let user = student_user();
        save_session("tok-1", &user).unwrap();
        let session = load_session().expect("session stored");
        assert_eq!(session.token, "tok-1");
        assert_eq!(session.user, user);

        clear_session();
        assert!(load_session().is_none());
        assert!(load_token().is_none());
    }

    #[test]
    fn corrupt_user_snapshot_is_ignored() {
        set_item(TOKEN_KEY, "tok-2").unwrap();
        set_item(USER_KEY, "{not json").unwrap();
        assert!(load_session().is_none());
        assert_eq!(load_token().as_deref(), Some("tok-2"));
        clear_session();
    }

    #[test]
    fn blank_token_counts_as_missing() {
        set_item(TOKEN_KEY, "   ").unwrap();
        assert!(load_token().is_none());
        clear_session();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_keeps_token() {
        set_item(TOKEN_KEY, "browser-token").unwrap();
        assert_eq!(load_token().as_deref(), Some("browser-token"));
        clear_session();
        assert!(load_token().is_none());
    }
}
