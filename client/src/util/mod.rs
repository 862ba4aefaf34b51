//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the rest of the crate stays testable without a DOM.

pub mod auth;
pub mod format;
#[cfg(feature = "hydrate")]
pub mod image_queue;
pub mod load;
pub mod session;
pub mod storage;
pub mod toast;
