//! Session persistence and route guarding.
//!
//! DESIGN
//! ======
//! Browser storage is abstracted as the [`store::SessionStore`] capability
//! so the submission flow and the guard never touch ambient globals
//! directly; tests inject the in-memory implementation instead.

pub mod guard;
pub mod store;
