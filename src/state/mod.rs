//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs whose transitions are ordinary methods, so
//! the whole machine is testable without a browser. The UI wraps the struct
//! in a single `RwSignal` provided via context.

pub mod auth;
pub mod validate;
