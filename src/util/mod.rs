//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, caret handling, object
//! URLs) from component logic. Each keeps a pure core so it can be tested
//! without a DOM.

pub mod attachment;
pub mod caret;
pub mod cookie;
