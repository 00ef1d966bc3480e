//! # Adhoc Core
//!
//! Turns a phone model and an action into a [`plan::CommandPlan`] and runs it
//! through a [`runner::CommandRunner`].
//!
//! * **[`plan`]**: Pure mapping from `(model, action)` to ordered commands.
//! * **[`runner`]**: The execution port and its system/dry-run adapters.
//! * **[`toggle`]**: Validation and in-order execution with fail-fast semantics.

pub mod plan;
pub mod runner;
pub mod toggle;

pub use plan::{CommandPlan, Step, SystemCommand};
pub use runner::{CommandRunner, DryRunRunner, SystemRunner};
pub use toggle::Toggler;
