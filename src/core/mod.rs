//! Core components of the `pdl-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`PdlClient`] and its builder.
//! - The primary [`PdlError`] type.
//! - The [`Params`] request-parameter map and its default-merge.
//! - Internal response decoding.

/// The main client (`PdlClient`), builder, and configuration.
pub mod client;
/// The primary error type (`PdlError`) for the crate.
pub mod error;
/// Request-parameter maps and default-merging.
pub mod params;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::PdlClient`
pub use client::{PdlClient, PdlClientBuilder};
pub use error::PdlError;
pub use params::Params;
