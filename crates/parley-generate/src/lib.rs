//! parley-generate
//!
//! Client for the downstream text-generation endpoint.

pub mod client;
pub mod error;

pub use client::GenerateClient;
pub use error::GenerateError;
