//! Error handling for PKE operations.

use core::fmt;

use ecelgamal_algorithms::error::Error as PrimitiveError;
use ecelgamal_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Primitive(PrimitiveError),
    Api(CoreError),
    /// The base point failed the curve-membership check
    InvalidBasePoint(&'static str),
    /// The message point failed the curve-membership check
    InvalidMessagePoint(&'static str),
    InvalidKey(&'static str),
    InvalidCiphertextFormat(&'static str),
    /// C1 or C2 failed the curve-membership check
    InvalidCiphertextPoint(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::InvalidBasePoint(context) => {
                write!(f, "{}: base point is not on the curve", context)
            }
            Error::InvalidMessagePoint(context) => {
                write!(f, "{}: message point is not on the curve", context)
            }
            Error::InvalidKey(reason) => write!(f, "Invalid EC-ElGamal key: {}", reason),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid EC-ElGamal ciphertext format: {}", reason)
            }
            Error::InvalidCiphertextPoint(context) => {
                write!(f, "{}: ciphertext point is not on the curve", context)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidBasePoint(context) => CoreError::InvalidBasePoint { context },
            Error::InvalidMessagePoint(context) => CoreError::InvalidMessagePoint { context },
            Error::InvalidKey(reason) => CoreError::InvalidKey {
                context: "EC-ElGamal",
                message: reason.to_string(),
            },
            Error::InvalidCiphertextFormat(reason) => CoreError::InvalidCiphertext {
                context: "EC-ElGamal",
                message: reason.to_string(),
            },
            Error::InvalidCiphertextPoint(context) => CoreError::InvalidCiphertext {
                context,
                message: "point is not on the curve".to_string(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
