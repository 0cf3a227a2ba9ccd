//! UI Components
//!
//! Reusable Leptos components for the MediTrack screens.

pub mod header;
pub mod loading;
pub mod medicine_card;
pub mod medicine_form;
pub mod profile_card;
pub mod toast;

pub use header::Header;
pub use loading::Loading;
pub use medicine_card::MedicineCard;
pub use medicine_form::MedicineForm;
pub use profile_card::ProfileCard;
pub use toast::Toast;
