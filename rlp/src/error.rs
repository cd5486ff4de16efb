//! Error types for RLP output operations

use thiserror::Error;

/// Error type for RLP output operations.
///
/// Every variant describes a misuse of [crate::Output] by the caller, except
/// [Error::InternalSizeInconsistency], which indicates a bug in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("terminated RLP output, cannot add more items")]
    SequenceTerminated,
    #[error("end_list called with no matching start_list")]
    UnmatchedEndList,
    #[error("a list has been started but not ended")]
    UnbalancedStructure,
    #[error("destination size mismatch: expected {expected} bytes, found {found}")]
    SizeMismatch { expected: usize, found: usize },
    #[error("internal size inconsistency: expected {expected} bytes, wrote {found}")]
    InternalSizeInconsistency { expected: usize, found: usize },
}
