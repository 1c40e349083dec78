//! src/capability/error.rs

use std::io;
use thiserror::Error;

/// Everything that can go wrong while a sender pushes bytes out.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{transport} send failed: {reason}")]
    Transport {
        transport: &'static str,
        reason: String,
    },
}

/// Everything that can go wrong while a closer releases a connection.
#[derive(Debug, Error)]
pub enum CloseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{strategy} close failed: {reason}")]
    Release {
        strategy: &'static str,
        reason: String,
    },
}

/// Returned when a sender or closer kind cannot be parsed from its name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown sender kind '{0}' (expected tcp or udp)")]
    UnknownSender(String),

    #[error("Unknown closer kind '{0}' (expected quick or safe)")]
    UnknownCloser(String),
}
