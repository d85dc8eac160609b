//! Error types for the shell around the window manager.
//!
//! The window-manager core itself never fails: unknown identifiers and
//! unresolvable pointer targets degrade to no-ops. Only terminal I/O and
//! command-line validation surface errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick interval must be between {min} and {max} ms, got {value}")]
    TickOutOfRange { value: u64, min: u64, max: u64 },
}

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
