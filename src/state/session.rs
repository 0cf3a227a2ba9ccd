//! Session and preference storage
//!
//! Durable client-side storage behind an injectable trait, so the
//! controller never touches `localStorage` directly and tests can run
//! against an in-memory map.

use crate::state::global::User;

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user object
pub const USER_KEY: &str = "user";
/// Storage key for the dark-mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Storage key for a user's avatar preference
pub fn avatar_key(user_id: &str) -> String {
    format!("avatar_{}", user_id)
}

/// The authenticated-user context held by the client
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Durable key-value storage with session semantics layered on top.
///
/// Implementors provide the four primitive operations; session, avatar
/// and dark-mode handling are shared provided methods.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear_all(&self);

    /// Persist a freshly authenticated session
    fn save(&self, token: &str, user: &User) {
        self.set(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.set(USER_KEY, &json);
        }
    }

    /// Read the persisted session at startup.
    ///
    /// Both keys must be present. A user object that no longer parses
    /// wipes all stored state rather than failing the app.
    fn load(&self) -> Option<Session> {
        let token = self.get(TOKEN_KEY)?;
        let raw = self.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(Session { token, user }),
            Err(_) => {
                self.clear_all();
                None
            }
        }
    }

    /// Remove the session keys, leaving preferences alone
    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }

    /// Bearer token for authenticated calls
    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    fn avatar(&self, user_id: &str) -> Option<String> {
        self.get(&avatar_key(user_id))
    }

    fn set_avatar(&self, user_id: &str, avatar: &str) {
        self.set(&avatar_key(user_id), avatar);
    }

    fn dark_mode(&self) -> bool {
        self.get(DARK_MODE_KEY).as_deref() == Some("true")
    }

    fn set_dark_mode(&self, enabled: bool) {
        self.set(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }
}

/// `localStorage`-backed store used by the running app
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear_all(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.clear();
        }
    }
}

/// In-memory store for native tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SessionStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear_all(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: "u1".to_string(),
            username: "alice".to_string(),
            name: None,
            email: Some("alice@example.com".to_string()),
            avatar: None,
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = MemoryStorage::default();
        store.save("t1", &alice());

        let session = store.load().unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.user, alice());
        assert_eq!(store.token().as_deref(), Some("t1"));
    }

    #[test]
    fn test_load_requires_both_keys() {
        let store = MemoryStorage::default();
        store.set(TOKEN_KEY, "t1");
        assert!(store.load().is_none());
        // A lone token is not corruption; nothing gets wiped
        assert_eq!(store.token().as_deref(), Some("t1"));
    }

    #[test]
    fn test_corrupt_user_wipes_everything() {
        let store = MemoryStorage::default();
        store.set(TOKEN_KEY, "t1");
        store.set(USER_KEY, "{not json");
        store.set_avatar("u1", "💊");

        assert!(store.load().is_none());
        assert!(store.token().is_none());
        assert!(store.avatar("u1").is_none());
    }

    #[test]
    fn test_clear_keeps_preferences() {
        let store = MemoryStorage::default();
        store.save("t1", &alice());
        store.set_avatar("u1", "🩺");
        store.set_dark_mode(true);

        store.clear();

        assert!(store.load().is_none());
        assert_eq!(store.avatar("u1").as_deref(), Some("🩺"));
        assert!(store.dark_mode());
    }

    #[test]
    fn test_avatar_keyed_per_user() {
        let store = MemoryStorage::default();
        store.set_avatar("u1", "💊");
        store.set_avatar("u2", "🏥");

        assert_eq!(store.avatar("u1").as_deref(), Some("💊"));
        assert_eq!(store.avatar("u2").as_deref(), Some("🏥"));
        assert!(store.avatar("u3").is_none());
    }

    #[test]
    fn test_dark_mode_defaults_off() {
        let store = MemoryStorage::default();
        assert!(!store.dark_mode());

        store.set_dark_mode(true);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));

        store.set_dark_mode(false);
        assert!(!store.dark_mode());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_storage_roundtrip() {
        let store = BrowserStorage;
        store.clear_all();

        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.remove("k");
        assert!(store.get("k").is_none());
    }
}
