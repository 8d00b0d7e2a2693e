//! remshield gateway library entry.
//!
//! This crate wires the toggle store, request pipeline, interception
//! middleware, exposure suppression, and secret vault into a deployable
//! gateway. It is consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod exposure;
pub mod ops;
pub mod pipeline;
pub mod platform;
pub mod router;
pub mod secrets;
pub mod store;
pub mod transport;
