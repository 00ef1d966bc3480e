//! # Adhoc Common
//!
//! Shared building blocks for the ad-hoc WiFi toggler.
//!
//! * **[`model`]**: The input value types (phone model, action, address).
//! * **[`config`]**: Runtime configuration folded from the command line.
//! * **[`error`]**: The error taxonomy every layer reports through.
//! * **[`network`]**: Read-only views of the host's network interfaces.

pub mod config;
pub mod error;
pub mod model;
pub mod network;

pub use error::ToggleError;
