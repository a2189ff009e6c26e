//! # Error Handling
//!
//! Flat, exhaustive error taxonomy for decoding wired M-Bus frames and
//! application-layer records. Every variant that can arise from malformed
//! input data carries the byte offset (and, where useful, the offending
//! byte) at which the problem was found.

use thiserror::Error;

/// Errors that can occur while decoding M-Bus frames, records, or values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MBusError {
    /// A structural rule was violated (bad checksum, bad start/stop byte,
    /// an extension chain that ran past its limit, and so on).
    #[error("validation failed at offset {offset}: {message}")]
    Validation { offset: usize, message: String },

    /// The input ran out before a complete field could be read.
    #[error("unexpected end of input at offset {offset}: needed {needed} more byte(s)")]
    UnexpectedEnd { offset: usize, needed: usize },

    /// A field was present but its value could not be turned into a
    /// meaningful decoded result (e.g. an invalid BCD nibble or an
    /// impossible calendar date).
    #[error("decode error at offset {offset}: {message}")]
    Decode { offset: usize, message: String },
}

impl MBusError {
    pub fn validation(offset: usize, message: impl Into<String>) -> Self {
        MBusError::Validation {
            offset,
            message: message.into(),
        }
    }

    pub fn unexpected_end(offset: usize, needed: usize) -> Self {
        MBusError::UnexpectedEnd { offset, needed }
    }

    pub fn decode(offset: usize, message: impl Into<String>) -> Self {
        MBusError::Decode {
            offset,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MBusError>;
