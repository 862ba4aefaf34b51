//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure state types and derivations. Pages and components hold them in
//! `RwSignal`s provided through Leptos context; nothing here touches the DOM
//! or the network, so every module is unit-tested natively.

pub mod auth;
pub mod load;
pub mod notifications;
pub mod object_form;
pub mod objects;
pub mod proposal;
pub mod session;
pub mod toast;
pub mod trades;
