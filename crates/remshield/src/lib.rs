//! Top-level facade crate for remshield.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use remshield_core::*;
}

pub mod gateway {
    pub use remshield_gateway::*;
}
