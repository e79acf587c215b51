/*
[INPUT]:  Configuration, adapter and startup failures
[OUTPUT]: Linker error with a failure kind, user message and exit code
[POS]:    Error handling layer - boundary between library and binary
[UPDATE]: When adding error sources or changing exit codes
*/

use thiserror::Error;
use vk_linker_adapter::VkError;

use crate::config::ConfigError;

/// Coarse failure categories reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Configuration,
    Transport,
    DataShape,
    Unclassified,
}

impl FailureKind {
    /// Process exit code; 2 is left to clap for usage errors
    pub fn exit_code(self) -> u8 {
        match self {
            FailureKind::Unclassified => 1,
            FailureKind::Configuration => 3,
            FailureKind::Transport => 4,
            FailureKind::DataShape => 5,
        }
    }
}

#[derive(Error, Debug)]
pub enum LinkerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] VkError),

    #[error("{url} is not a {domain} short link")]
    NotShortLink { url: String, domain: String },

    #[error("{0}")]
    Other(String),
}

impl LinkerError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LinkerError::Config(_) => FailureKind::Configuration,
            LinkerError::Client(err) if err.is_transport() => FailureKind::Transport,
            LinkerError::Client(err) if err.is_data_shape() => FailureKind::DataShape,
            LinkerError::Client(err) if err.is_config_error() => FailureKind::Configuration,
            LinkerError::Client(_) | LinkerError::NotShortLink { .. } | LinkerError::Other(_) => {
                FailureKind::Unclassified
            }
        }
    }

    /// One-line message printed by the binary
    pub fn user_message(&self) -> String {
        match self.kind() {
            FailureKind::Configuration => format!("Error: {}", self),
            FailureKind::Transport => format!("Error calling the VK API: {}", self),
            FailureKind::DataShape => format!("Error processing the VK API response: {}", self),
            FailureKind::Unclassified => format!("Unexpected error: {}", self),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}

/// Result type alias for linker operations
pub type Result<T> = std::result::Result<T, LinkerError>;
