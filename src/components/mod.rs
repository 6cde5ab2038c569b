//! Leptos components for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns the compose form and submission workflow; the other
//! modules render pieces of it and read shared state from context.

pub mod attachment_preview;
pub mod chat_widget;
pub mod emoji_picker;
pub mod message_bubble;
pub mod message_list;
