//! # smarthome-domain
//!
//! Pure domain model for the smarthome dashboard.
//!
//! ## Responsibilities
//! - Define the **light state**: a fixed-length row of on/off flags
//! - Define the **actions** a user can request (`allOn`, `allOff`, `toggle`)
//! - Define the **reducer**, the only way to compute a next state
//! - Contain all invariant enforcement (fixed length, index bounds)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod action;
pub mod error;
pub mod lights;
pub mod reducer;
