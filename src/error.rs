//! Parse errors for CIDR expressions.
//!
//! Every failure of the pipeline is attributable to the input text, so this is
//! the only error type the library returns. Arithmetic and classification are
//! total once an expression has been parsed.

use thiserror::Error;

/// Result alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Why a CIDR expression was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not of the form `address/prefix` (no slash, or more than one).
    #[error("invalid CIDR format: '{input}'")]
    InvalidCidrFormat { input: String },

    /// Prefix is not a base-10 integer in `0..=32`.
    #[error("invalid prefix length: '{prefix}' (expected 0-32)")]
    InvalidPrefix { prefix: String },

    /// Address is not four base-10 octets in `0..=255`.
    #[error("invalid IPv4 address '{address}': {reason}")]
    InvalidAddress {
        address: String,
        reason: AddressFault,
    },
}

/// What is wrong with a rejected address. Octet positions count from 1.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressFault {
    #[error("expected 4 octets, got {0}")]
    OctetCount(usize),

    #[error("octet {position} '{octet}' is not a number")]
    NotANumber { position: usize, octet: String },

    #[error("octet {position} '{octet}' is out of range 0-255")]
    OutOfRange { position: usize, octet: String },
}

impl ParseError {
    /// Short machine-friendly name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::InvalidCidrFormat { .. } => "InvalidCidrFormat",
            ParseError::InvalidPrefix { .. } => "InvalidPrefix",
            ParseError::InvalidAddress { .. } => "InvalidAddress",
        }
    }
}
