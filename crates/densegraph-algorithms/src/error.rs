//! Error types for matrix storage and graph algorithms

use thiserror::Error;

/// Coarse classification of every failure the engine can report.
///
/// Callers that translate errors into transport responses match on this
/// rather than on the concrete variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// An index or handle does not name anything that exists
    OutOfRange,
    /// The request is well-formed but not permitted (diagonal writes)
    InvalidOperation,
    /// Storage for the request could not be provided
    ResourceExhaustion,
}

/// Errors raised by the matrix store and the algorithm suite
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node index is not below the matrix size
    #[error("Node index {index} out of bounds for graph of size {size}")]
    OutOfRange { index: u32, size: u32 },

    /// Self-loops cannot be stored
    #[error("Cannot write diagonal entry ({0}, {0})")]
    DiagonalWrite(u32),

    /// The n x n buffer could not be allocated
    #[error("Cannot allocate adjacency matrix of size {size}x{size}")]
    AllocationFailed { size: u32 },
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::OutOfRange { .. } => ErrorKind::OutOfRange,
            GraphError::DiagonalWrite(_) => ErrorKind::InvalidOperation,
            GraphError::AllocationFailed { .. } => ErrorKind::ResourceExhaustion,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(GraphError::OutOfRange { index: 5, size: 3 }.kind(), ErrorKind::OutOfRange);
        assert_eq!(GraphError::DiagonalWrite(2).kind(), ErrorKind::InvalidOperation);
        assert_eq!(
            GraphError::AllocationFailed { size: u32::MAX }.kind(),
            ErrorKind::ResourceExhaustion
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GraphError::OutOfRange { index: 7, size: 4 };
        assert_eq!(err.to_string(), "Node index 7 out of bounds for graph of size 4");
        assert_eq!(GraphError::DiagonalWrite(3).to_string(), "Cannot write diagonal entry (3, 3)");
    }
}
