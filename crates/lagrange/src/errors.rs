use std::fmt;

pub use serialization::Error as SerializationError;

/// Errors that can occur while converting ceremony points to Lagrange form.
///
/// Nothing is written to the destination once any of these has been returned
/// during decoding, so a failed conversion can simply be re-run.
#[derive(Debug)]
pub enum Error {
    /// Seeking, reading, writing or flushing failed.
    Io(std::io::Error),
    /// The input contained bytes that are not a valid compressed point.
    Serialization(SerializationError),
    /// The number of points to convert is not the size of the domain.
    DomainSizeMismatch { count: usize, domain_size: usize },
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SerializationError> for Error {
    fn from(value: SerializationError) -> Self {
        // I/O failures are reported the same way whether they happened while
        // decoding points or anywhere else.
        match value {
            SerializationError::Io(err) => Self::Io(err),
            other => Self::Serialization(other),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Serialization(err) => write!(f, "{err}"),
            Self::DomainSizeMismatch { count, domain_size } => write!(
                f,
                "cannot convert {count} points over a domain of size {domain_size}"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::DomainSizeMismatch { .. } => None,
        }
    }
}
