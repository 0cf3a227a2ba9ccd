//! Backend API
//!
//! HTTP client layer for the MediTrack REST backend.

pub mod client;
pub mod error;

pub use client::{
    add_medicine, delete_medicine, fetch_medicines, fetch_profile, forgot_password, get_api_base,
    login, register, update_medicine, update_profile,
};
pub use error::{ApiError, ApiResult};
