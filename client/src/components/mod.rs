//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render marketplace chrome and list items while reading/writing
//! shared state from Leptos context providers.

pub mod navbar;
pub mod notification_dropdown;
pub mod object_card;
pub mod object_form_fields;
pub mod search_filters;
pub mod toaster;
pub mod trade_card;
