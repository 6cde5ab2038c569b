//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is plain data with methods; components wrap it in `RwSignal`s
//! provided via context. Keeping it free of DOM types lets the submission
//! workflow be tested natively.

pub mod chat;
pub mod ui;
