//! dorsia-core
//!
//! Pure domain types for the Dorsia diagnosis assistant. No inference logic
//! and no UI dependency; this is the shared vocabulary of the Dorsia system.

pub mod models;
