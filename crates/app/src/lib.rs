//! # smarthome-app
//!
//! Application layer — owns the live light state.
//!
//! ## Responsibilities
//! - Hold the **single writer** of the light state ([`store::LightsStore`])
//! - Run every dispatched action through the domain reducer
//! - Hand the resulting snapshot back to the adapter that publishes it
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod store;
