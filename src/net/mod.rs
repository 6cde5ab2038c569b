//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single POST per submission and `types` defines the
//! request/response shapes and the error taxonomy.

pub mod api;
pub mod types;
