//! Error types for mixer elements.

use thiserror::Error;

use crate::{ElementKind, ParameterSlot};

/// Failures reported by a mixing backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// The backend has no entry for this input and output
    #[error("no matrix entry for {input} -> {output}")]
    #[allow(missing_docs)]
    InvalidChannelPair { input: String, output: String },

    /// The backend could not be reached
    #[error("mixing backend unavailable: {0}")]
    Unavailable(String),
}

/// Main error type for element operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElementError {
    /// The element kind does not fit the selected channels
    #[error("{kind} cannot control {input_count} input(s) and {output_count} output(s)")]
    #[allow(missing_docs)]
    UnsupportedChannelCount {
        kind: ElementKind,
        input_count: usize,
        output_count: usize,
    },

    /// No element kind has this name
    #[error("unknown element kind: {0}")]
    UnknownKind(String),

    /// The element kind has no such control
    #[error("{kind} has no {parameter} control")]
    #[allow(missing_docs)]
    UnsupportedParameter {
        kind: ElementKind,
        parameter: ParameterSlot,
    },

    /// Controller numbers are 7-bit
    #[error("invalid MIDI controller number: {0}")]
    InvalidController(u8),

    /// A backend call failed
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result type alias for element operations.
pub type Result<T> = std::result::Result<T, ElementError>;
