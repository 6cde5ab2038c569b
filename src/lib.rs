//! # chat-widget
//!
//! Leptos + WASM chat widget for embedding in server-rendered pages, plus the
//! marker data contract for the companion location map.
//!
//! The widget renders a transcript, a compose form with emoji insertion and a
//! single pending attachment, and sends one multipart `POST` per message to
//! the chat endpoint. Browser-only code sits behind the `csr` feature; the
//! state, wire handling and map data compile natively for tests.
//!
//! JavaScript entry points (with `csr`):
//! - `mount_chat_widget(element)` mounts a widget into `element`
//! - `map_marker_layer()` returns the projected marker layer

pub mod app;
pub mod components;
pub mod config;
pub mod map;
pub mod net;
pub mod state;
pub mod util;
