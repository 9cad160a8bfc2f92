use std::fmt;

/// Errors that can occur while reading or writing serialized group elements.
#[derive(Debug)]
pub enum Error {
    /// The underlying reader or writer failed.
    ///
    /// Truncated input surfaces here as `std::io::ErrorKind::UnexpectedEof`.
    Io(std::io::Error),
    /// Bytes did not decode to a G1 point in the prime order subgroup.
    CouldNotDeserializeG1Point {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// Bytes did not decode to a G2 point in the prime order subgroup.
    CouldNotDeserializeG2Point {
        /// Raw bytes attempted to deserialize.
        bytes: Vec<u8>,
    },
    /// A serialized point had an incorrect byte length.
    PointHasInvalidLength {
        /// Raw bytes with incorrect length.
        bytes: Vec<u8>,
        /// Detected length of the bytes.
        length: usize,
    },
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error while (de)serializing points: {err}"),
            Self::CouldNotDeserializeG1Point { bytes } => {
                write!(f, "invalid compressed G1 point: 0x{}", hex::encode(bytes))
            }
            Self::CouldNotDeserializeG2Point { bytes } => {
                write!(f, "invalid compressed G2 point: 0x{}", hex::encode(bytes))
            }
            Self::PointHasInvalidLength { length, .. } => {
                write!(f, "serialized point has invalid length {length}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}
