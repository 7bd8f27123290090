//! Key/value session storage.
//!
//! Browsers use `localStorage`; host builds keep values in a thread-local map
//! so that session handling can be exercised without a DOM.

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const CURRENT_USER_KEY: &str = "current_user";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read {}", key))
    }

    pub fn set(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to write {}", key))
    }

    pub fn remove(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove {}", key))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Result<Option<String>, String> {
        Ok(STORE.with(|store| store.borrow().get(key).cloned()))
    }

    pub fn set(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove(key: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
        Ok(())
    }
}

pub use backend::{get, remove, set};

pub fn access_token() -> Option<String> {
    get(ACCESS_TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn clear_session() {
    for key in [ACCESS_TOKEN_KEY, CURRENT_USER_KEY] {
        if let Err(err) = remove(key) {
            log::warn!("{}", err);
        }
    }
}
