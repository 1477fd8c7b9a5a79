//! Error type definitions for curve and encryption operations

use thiserror::Error;

/// Primary error type for curve arithmetic and EC-ElGamal operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A modular inverse was requested for a value that is not coprime to the modulus
    #[error("{context}: {value} has no inverse modulo {modulus}")]
    NoInverse {
        context: &'static str,
        value: String,
        modulus: String,
    },

    /// The base point supplied to key generation is not on the curve
    #[error("Invalid base point: {context}")]
    InvalidBasePoint { context: &'static str },

    /// The message point supplied to encryption is not on the curve
    #[error("Invalid message point: {context}")]
    InvalidMessagePoint { context: &'static str },

    /// Invalid ciphertext error
    #[error("Invalid ciphertext: {context}: {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Serialization error
    #[error("Serialization error: {context}: {message}")]
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for curve and encryption operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::NoInverse { value, modulus, .. } => Self::NoInverse {
                context,
                value,
                modulus,
            },
            Self::InvalidBasePoint { .. } => Self::InvalidBasePoint { context },
            Self::InvalidMessagePoint { .. } => Self::InvalidMessagePoint { context },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::SerializationError { message, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error where the variant carries one
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidCiphertext { context, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { context, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
            other => other,
        }
    }

    /// Context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::NoInverse { context, .. }
            | Self::InvalidBasePoint { context }
            | Self::InvalidMessagePoint { context }
            | Self::InvalidCiphertext { context, .. }
            | Self::InvalidKey { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::SerializationError { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}
