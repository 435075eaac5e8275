//! Page components, one per route. Thin views over the auth core.

pub mod auth;
pub mod dashboard;
pub mod home;
