//! Pages
//!
//! Top-level components for each screen the app can show.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod register;

pub use dashboard::Dashboard;
pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use register::Register;
