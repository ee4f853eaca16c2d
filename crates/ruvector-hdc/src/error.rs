//! Error types for hypervector construction and algebra

use crate::kind::VectorKind;
use thiserror::Error;

/// Result type alias for HDC operations
pub type Result<T> = std::result::Result<T, HdcError>;

/// Errors raised by constructors and algebra operations
///
/// Every error is a local call failure: nothing is retried and no
/// partially built vector is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HdcError {
    /// Graded bounds violate their domain constraints
    #[error("Invalid range for {domain}: lower={lower}, upper={upper}")]
    InvalidRange {
        /// Requested lower bound
        lower: f64,
        /// Requested upper bound
        upper: f64,
        /// Human readable name of the violated domain
        domain: &'static str,
    },

    /// Unknown policy string, empty collection, or out-of-domain parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No formula is defined for this operation on this variant
    #[error("{operation} is not implemented for {kind}")]
    NotImplemented {
        /// Operation name
        operation: &'static str,
        /// Variant the operation was invoked on
        kind: VectorKind,
    },

    /// Operand lengths differ
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length of the first operand
        expected: usize,
        /// Length of the offending operand
        actual: usize,
    },

    /// Operand variants differ
    #[error("Vector kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// Variant of the first operand
        expected: VectorKind,
        /// Variant of the offending operand
        actual: VectorKind,
    },

    /// Graded unbind with a known operand of exactly 0.5
    #[error("Cannot unbind at position {index}: known operand is 0.5")]
    UnrecoverableUnbind {
        /// Position of the zero denominator
        index: usize,
    },
}

impl HdcError {
    /// Shorthand for [`HdcError::InvalidArgument`]
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        HdcError::InvalidArgument(msg.into())
    }

    /// True for both the length and the variant flavour of operand mismatch
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            HdcError::DimensionMismatch { .. } | HdcError::KindMismatch { .. }
        )
    }
}
