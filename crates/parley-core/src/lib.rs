//! parley-core
//!
//! Pure domain types for the chat relay: conversation turns, the inbound
//! request and outbound reply shapes, and caller identity.
//! No HTTP or AWS dependency; this is the shared vocabulary of Parley.

pub mod error;
pub mod models;
