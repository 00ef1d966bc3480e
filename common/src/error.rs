use std::io;

use thiserror::Error;

/// Everything that can stop a toggle. All variants are terminal for the
/// current invocation; nothing is retried and nothing is rolled back.
#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("unsupported phone model '{0}' (expected 0/nexus or 1/hero)")]
    UnsupportedModel(String),

    #[error("an IPv4 address is required to start the ad-hoc network")]
    MissingAddress,

    #[error("invalid IPv4 address '{0}'")]
    InvalidAddress(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("step {step} ({name}) could not be launched")]
    Launch {
        step: usize,
        name: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("step {step} ({name}) failed with exit status {exit_status}")]
    CommandFailed {
        step: usize,
        name: &'static str,
        exit_status: i32,
    },
}

impl ToggleError {
    /// True when the error was raised while validating input, before any
    /// command had a chance to run.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ToggleError::UnsupportedModel(_)
                | ToggleError::MissingAddress
                | ToggleError::InvalidAddress(_)
                | ToggleError::InvalidConfig(_)
        )
    }
}
