//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues auth/table/storage calls, `query` builds table paths,
//! `types` defines row and payload shapes, and `error` the failure type.

pub mod api;
pub mod error;
pub mod query;
pub mod types;
