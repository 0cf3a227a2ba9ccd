//! Global Application State
//!
//! Reactive view-state controller using Leptos signals: the current
//! screen, the session user, the medicine list and form, and the
//! persisted preferences, all driven through an injected [`SessionStore`].

use leptos::*;
use std::rc::Rc;

use crate::state::session::SessionStore;

/// Avatar choices offered on the profile card
pub const AVATARS: [&str; 8] = ["👨‍⚕️", "👩‍⚕️", "🧑‍⚕️", "💊", "🏥", "❤️", "🩺", "🧬"];

/// Daily health quotes, one picked at random per visit
pub const QUOTES: [&str; 3] = [
    "The greatest wealth is health.",
    "Take care of your body. It's the only place you have to live.",
    "Health is a duty.",
];

/// Canonical user model; also the persisted `user` storage shape
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Kind of medicine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum MedicineType {
    #[default]
    Tablet,
    Capsule,
    Syrup,
    Injection,
    Drops,
    Inhaler,
    Cream,
    Other,
}

impl MedicineType {
    /// All kinds, in form-selector order
    pub const ALL: [MedicineType; 8] = [
        MedicineType::Tablet,
        MedicineType::Capsule,
        MedicineType::Syrup,
        MedicineType::Injection,
        MedicineType::Drops,
        MedicineType::Inhaler,
        MedicineType::Cream,
        MedicineType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MedicineType::Tablet => "Tablet",
            MedicineType::Capsule => "Capsule",
            MedicineType::Syrup => "Syrup",
            MedicineType::Injection => "Injection",
            MedicineType::Drops => "Drops",
            MedicineType::Inhaler => "Inhaler",
            MedicineType::Cream => "Cream",
            MedicineType::Other => "Other",
        }
    }

    /// Parse a wire value; anything unrecognized is Other
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Tablet" => MedicineType::Tablet,
            "Capsule" => MedicineType::Capsule,
            "Syrup" => MedicineType::Syrup,
            "Injection" => MedicineType::Injection,
            "Drops" => MedicineType::Drops,
            "Inhaler" => MedicineType::Inhaler,
            "Cream" => MedicineType::Cream,
            _ => MedicineType::Other,
        }
    }
}

/// Canonical medicine model, normalized at the API boundary
#[derive(Clone, Debug, PartialEq)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub kind: MedicineType,
    /// Owning user identifier
    pub user: String,
    /// ISO-8601 creation timestamp as sent by the backend
    pub created_at: Option<String>,
}

/// Outgoing payload for medicine create/update
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MedicineData {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    #[serde(rename = "type")]
    pub kind: MedicineType,
    pub user: String,
}

/// Mutually exclusive UI states the root component renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    ForgotPassword,
    Dashboard,
}

/// Signal bundle backing the medicine create/edit form
#[derive(Clone, Copy)]
pub struct MedicineForm {
    pub name: RwSignal<String>,
    pub dosage: RwSignal<String>,
    pub frequency: RwSignal<String>,
    pub kind: RwSignal<MedicineType>,
    /// Identifier of the medicine being edited; `None` means create
    pub editing_id: RwSignal<Option<String>>,
}

impl MedicineForm {
    fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            dosage: create_rw_signal(String::new()),
            frequency: create_rw_signal(String::new()),
            kind: create_rw_signal(MedicineType::Tablet),
            editing_id: create_rw_signal(None),
        }
    }

    /// Load a medicine's fields for editing
    pub fn load(&self, medicine: &Medicine) {
        self.editing_id.set(Some(medicine.id.clone()));
        self.name.set(medicine.name.clone());
        self.dosage.set(medicine.dosage.clone());
        self.frequency.set(medicine.frequency.clone());
        self.kind.set(medicine.kind);
    }

    /// Reset to create-mode defaults
    pub fn reset(&self) {
        self.editing_id.set(None);
        self.name.set(String::new());
        self.dosage.set(String::new());
        self.frequency.set(String::new());
        self.kind.set(MedicineType::Tablet);
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.with_untracked(Option::is_some)
    }

    /// Snapshot the form into an outgoing payload
    pub fn data(&self, user_id: &str) -> MedicineData {
        MedicineData {
            name: self.name.get_untracked(),
            dosage: self.dosage.get_untracked(),
            frequency: self.frequency.get_untracked(),
            kind: self.kind.get_untracked(),
            user: user_id.to_string(),
        }
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Injected durable storage
    pub store: Rc<dyn SessionStore>,
    /// Currently rendered screen
    pub screen: RwSignal<Screen>,
    /// Logged-in user, if any
    pub user: RwSignal<Option<User>>,
    /// Medicine list shown on the dashboard
    pub medicines: RwSignal<Vec<Medicine>>,
    /// Medicine create/edit form
    pub form: MedicineForm,
    /// Current avatar symbol
    pub avatar: RwSignal<String>,
    /// Dark-mode flag, mirrored to storage
    pub dark_mode: RwSignal<bool>,
    /// Daily health quote shown in the header
    pub quote: RwSignal<&'static str>,
    /// Error shown inline on the auth screens
    pub auth_error: RwSignal<Option<String>>,
    /// Notice shown inline on the auth screens
    pub auth_notice: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state(store: Rc<dyn SessionStore>) {
    provide_context(GlobalState::new(store));
}

impl GlobalState {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        let dark_mode = store.dark_mode();
        Self {
            store,
            screen: create_rw_signal(Screen::Login),
            user: create_rw_signal(None),
            medicines: create_rw_signal(Vec::new()),
            form: MedicineForm::new(),
            avatar: create_rw_signal(AVATARS[0].to_string()),
            dark_mode: create_rw_signal(dark_mode),
            quote: create_rw_signal(QUOTES[0]),
            auth_error: create_rw_signal(None),
            auth_notice: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    /// Startup: restore a persisted session, skipping the login screen.
    ///
    /// A corrupt persisted user has already wiped storage inside
    /// `load()`, so the screen simply stays on Login.
    pub fn restore_session(&self) {
        if let Some(session) = self.store.load() {
            if let Some(saved) = self.store.avatar(&session.user.id) {
                self.avatar.set(saved);
            }
            self.user.set(Some(session.user));
            self.screen.set(Screen::Dashboard);
        }
    }

    /// Successful login or registration: persist the session, restore
    /// the user's avatar preference and enter the dashboard.
    pub fn complete_auth(&self, token: &str, user: User) {
        self.store.save(token, &user);
        let avatar = self
            .store
            .avatar(&user.id)
            .unwrap_or_else(|| AVATARS[0].to_string());
        self.avatar.set(avatar);
        self.user.set(Some(user));
        self.auth_error.set(None);
        self.screen.set(Screen::Dashboard);
    }

    /// Clear the session (avatar preferences survive) and return to Login
    pub fn logout(&self) {
        self.store.clear();
        self.user.set(None);
        self.medicines.set(Vec::new());
        self.form.reset();
        self.avatar.set(AVATARS[0].to_string());
        self.screen.set(Screen::Login);
    }

    /// Explicit navigation between screens; stale auth messages go away
    pub fn navigate(&self, screen: Screen) {
        self.auth_error.set(None);
        self.auth_notice.set(None);
        self.screen.set(screen);
    }

    /// Append a freshly created medicine
    pub fn push_medicine(&self, created: Medicine) {
        self.medicines.update(|list| list.push(created));
    }

    /// Replace the list entry matching the updated medicine's id
    pub fn replace_medicine(&self, updated: Medicine) {
        self.medicines.update(|list| {
            if let Some(slot) = list.iter_mut().find(|m| m.id == updated.id) {
                *slot = updated;
            }
        });
    }

    /// Remove the entry with the given id; if it was being edited, the
    /// form's editing id would dangle, so the form resets too.
    pub fn remove_medicine(&self, id: &str) {
        self.medicines.update(|list| list.retain(|m| m.id != id));
        if self.form.editing_id.get_untracked().as_deref() == Some(id) {
            self.form.reset();
        }
    }

    /// Persist the avatar choice for the logged-in user
    pub fn save_avatar(&self, choice: &str) {
        if let Some(user) = self.user.get_untracked() {
            self.store.set_avatar(&user.id, choice);
            self.avatar.set(choice.to_string());
        }
    }

    /// Apply a refreshed user record, re-persisting it with the token
    pub fn update_user(&self, user: User) {
        if let Some(token) = self.store.token() {
            self.store.save(&token, &user);
        }
        self.user.set(Some(user));
    }

    pub fn toggle_dark_mode(&self) {
        let enabled = !self.dark_mode.get_untracked();
        self.dark_mode.set(enabled);
        self.store.set_dark_mode(enabled);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{MemoryStorage, TOKEN_KEY, USER_KEY};

    fn with_state(test: impl FnOnce(GlobalState, Rc<MemoryStorage>)) {
        let runtime = create_runtime();
        let store = Rc::new(MemoryStorage::default());
        let state = GlobalState::new(store.clone());
        test(state, store);
        runtime.dispose();
    }

    fn alice() -> User {
        User {
            id: "u1".to_string(),
            username: "alice".to_string(),
            name: None,
            email: None,
            avatar: None,
        }
    }

    fn aspirin() -> Medicine {
        Medicine {
            id: "m1".to_string(),
            name: "Aspirin".to_string(),
            dosage: "100mg".to_string(),
            frequency: "daily".to_string(),
            kind: MedicineType::Tablet,
            user: "u1".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_restore_session_enters_dashboard() {
        with_state(|state, store| {
            store.save("t1", &alice());
            store.set_avatar("u1", "🩺");

            state.restore_session();

            assert_eq!(state.screen.get_untracked(), Screen::Dashboard);
            assert_eq!(state.user.get_untracked(), Some(alice()));
            assert_eq!(state.avatar.get_untracked(), "🩺");
        });
    }

    #[test]
    fn test_restore_without_session_stays_on_login() {
        with_state(|state, _store| {
            state.restore_session();
            assert_eq!(state.screen.get_untracked(), Screen::Login);
            assert!(state.user.get_untracked().is_none());
        });
    }

    #[test]
    fn test_restore_with_corrupt_user_wipes_storage() {
        with_state(|state, store| {
            store.set(TOKEN_KEY, "t1");
            store.set(USER_KEY, "{broken");
            store.set_avatar("u1", "🩺");

            state.restore_session();

            assert_eq!(state.screen.get_untracked(), Screen::Login);
            assert!(store.get(TOKEN_KEY).is_none());
            assert!(store.avatar("u1").is_none());
        });
    }

    #[test]
    fn test_complete_auth_persists_and_navigates() {
        // Login "alice"/"secret" answered with token t1 and user u1
        with_state(|state, store| {
            state.complete_auth("t1", alice());

            assert_eq!(store.token().as_deref(), Some("t1"));
            let session = store.load().unwrap();
            assert_eq!(session.user.id, "u1");
            assert_eq!(session.user.username, "alice");
            assert_eq!(state.screen.get_untracked(), Screen::Dashboard);
        });
    }

    #[test]
    fn test_complete_auth_restores_saved_avatar() {
        with_state(|state, store| {
            store.set_avatar("u1", "🧬");
            state.complete_auth("t1", alice());
            assert_eq!(state.avatar.get_untracked(), "🧬");
        });
    }

    #[test]
    fn test_logout_clears_session_keeps_avatar() {
        with_state(|state, store| {
            state.complete_auth("t1", alice());
            state.save_avatar("💊");
            state.push_medicine(aspirin());
            state.form.load(&aspirin());

            state.logout();

            assert_eq!(state.screen.get_untracked(), Screen::Login);
            assert!(store.token().is_none());
            assert!(store.load().is_none());
            assert_eq!(store.avatar("u1").as_deref(), Some("💊"));
            assert!(state.medicines.get_untracked().is_empty());
            assert!(!state.form.is_editing());
        });
    }

    #[test]
    fn test_navigate_clears_auth_messages() {
        with_state(|state, _store| {
            state.auth_error.set(Some("Login failed".to_string()));
            state.auth_notice.set(Some("Link sent".to_string()));

            state.navigate(Screen::Register);

            assert_eq!(state.screen.get_untracked(), Screen::Register);
            assert!(state.auth_error.get_untracked().is_none());
            assert!(state.auth_notice.get_untracked().is_none());
        });
    }

    #[test]
    fn test_push_appends_replace_targets_one_entry() {
        with_state(|state, _store| {
            let mut other = aspirin();
            other.id = "m2".to_string();
            other.name = "Ibuprofen".to_string();

            state.push_medicine(aspirin());
            state.push_medicine(other.clone());
            assert_eq!(state.medicines.get_untracked().len(), 2);

            let mut updated = aspirin();
            updated.dosage = "200mg".to_string();
            state.replace_medicine(updated);

            let list = state.medicines.get_untracked();
            assert_eq!(list[0].dosage, "200mg");
            assert_eq!(list[1], other);
        });
    }

    #[test]
    fn test_remove_medicine_resets_form_if_editing() {
        with_state(|state, _store| {
            state.push_medicine(aspirin());
            state.form.load(&aspirin());
            assert!(state.form.is_editing());

            state.remove_medicine("m1");

            assert!(state.medicines.get_untracked().is_empty());
            assert!(!state.form.is_editing());
            assert_eq!(state.form.name.get_untracked(), "");
        });
    }

    #[test]
    fn test_remove_other_medicine_keeps_form() {
        with_state(|state, _store| {
            let mut other = aspirin();
            other.id = "m2".to_string();

            state.push_medicine(aspirin());
            state.push_medicine(other);
            state.form.load(&aspirin());

            state.remove_medicine("m2");

            assert_eq!(state.medicines.get_untracked().len(), 1);
            assert_eq!(
                state.form.editing_id.get_untracked().as_deref(),
                Some("m1")
            );
        });
    }

    #[test]
    fn test_save_avatar_persists_per_user() {
        with_state(|state, store| {
            state.complete_auth("t1", alice());
            state.save_avatar("❤️");

            assert_eq!(state.avatar.get_untracked(), "❤️");
            assert_eq!(store.avatar("u1").as_deref(), Some("❤️"));
        });
    }

    #[test]
    fn test_update_user_repersists_with_token() {
        with_state(|state, store| {
            state.complete_auth("t1", alice());

            let mut refreshed = alice();
            refreshed.email = Some("alice@example.com".to_string());
            state.update_user(refreshed.clone());

            let session = store.load().unwrap();
            assert_eq!(session.token, "t1");
            assert_eq!(session.user, refreshed);
        });
    }

    #[test]
    fn test_toggle_dark_mode_persists() {
        with_state(|state, store| {
            assert!(!state.dark_mode.get_untracked());
            state.toggle_dark_mode();
            assert!(state.dark_mode.get_untracked());
            assert!(store.dark_mode());
            state.toggle_dark_mode();
            assert!(!store.dark_mode());
        });
    }

    #[test]
    fn test_form_load_and_data() {
        with_state(|state, _store| {
            state.form.load(&aspirin());
            let data = state.form.data("u1");
            assert_eq!(
                data,
                MedicineData {
                    name: "Aspirin".to_string(),
                    dosage: "100mg".to_string(),
                    frequency: "daily".to_string(),
                    kind: MedicineType::Tablet,
                    user: "u1".to_string(),
                }
            );
        });
    }
}
