//! State Management
//!
//! Global application state and durable session storage.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState, Medicine, MedicineType, Screen, User};
pub use session::{BrowserStorage, Session, SessionStore};
