//! Shared primitives and traits for the Aequorea protein analysis toolkit.
//!
//! `aequorea-core` provides the foundation the other Aequorea crates build on:
//!
//! - **Error types** — [`AequoreaError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Sequence`], [`ContentAddressable`], [`Annotated`]
//! - **Hashing** — SHA-256 content addressing for stable sequence identity

pub mod error;
pub mod hash;
pub mod traits;

pub use error::{AequoreaError, Result};
pub use traits::*;
