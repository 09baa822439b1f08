//! Error types for the Ohmdraw circuit solver.
//!
//! This module provides a unified error type [`OhmdrawError`] that covers
//! all error conditions that can occur while parsing the circuit notation,
//! validating the network and solving it.

use thiserror::Error;

/// Result type alias using [`OhmdrawError`].
pub type Result<T> = std::result::Result<T, OhmdrawError>;

/// Unified error type for all Ohmdraw operations.
#[derive(Error, Debug)]
pub enum OhmdrawError {
    // ============ Notation Errors ============
    /// Structural failure in the `Name:Source:Topology` notation
    #[error("Malformed circuit notation at position {position}: {message}")]
    MalformedNotation { position: usize, message: String },

    // ============ Solving Errors ============
    /// Neither a positive voltage nor a positive current was supplied
    #[error("Insufficient circuit specification: {message}")]
    InsufficientSpec { message: String },

    /// A short circuit or overflow that would make the solution infinite or undefined
    #[error("Degenerate network: {message}")]
    DegenerateNetwork { message: String },

    // ============ I/O Errors ============
    /// Error reading circuit notations from input
    #[error("Failed to read circuit input: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl OhmdrawError {
    /// Create a malformed notation error
    pub fn malformed(position: usize, message: impl Into<String>) -> Self {
        Self::MalformedNotation {
            position,
            message: message.into(),
        }
    }

    /// Create an insufficient specification error
    pub fn insufficient(message: impl Into<String>) -> Self {
        Self::InsufficientSpec {
            message: message.into(),
        }
    }

    /// Create a degenerate network error
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateNetwork {
            message: message.into(),
        }
    }
}
