//! remshield core: request classification, denial templates, and the
//! string-obfuscation utility.
//!
//! This crate holds everything with real decision logic and a stable wire
//! contract: the surface classifier, the denial engine with its per-surface
//! response bodies, and the reversible obfuscation helpers. It carries no
//! transport or runtime dependencies so it can be reused outside the gateway.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `RemShieldError`/`Result`; malformed
//! request components classify as non-matches instead of erroring.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod classifier;
pub mod denial;
pub mod engine;
pub mod error;
pub mod obfuscate;
pub mod signature;

/// Shared result type.
pub use error::{RemShieldError, Result};
