//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth redirect, fetch-on-mount,
//! submit flows) and delegates rendering details to `components`.

pub mod auth;
pub mod create_object;
pub mod edit_object;
pub mod home;
pub mod my_objects;
pub mod not_found;
pub mod object_detail;
pub mod profile;
pub mod propose_trade;
pub mod trades;
