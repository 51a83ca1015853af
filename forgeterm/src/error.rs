//! Error types for session configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("scrollback capacity must be greater than zero")]
    ZeroScrollbackCapacity,

    #[error("maximum input length must be greater than zero")]
    ZeroInputLength,

    #[error("history size must be greater than zero")]
    ZeroHistorySize,
}
