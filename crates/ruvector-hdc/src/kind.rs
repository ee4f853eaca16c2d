//! Variant tags and the element-kind classifier
//!
//! Algebra operations never look at storage to decide which formula to
//! apply. They ask [`VectorKind::element_kind`] instead, so adding a new
//! variant means extending this one match.

use std::fmt;

/// Element domain of a sparse vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SparseDomain {
    /// Entries are `true`; absent positions are `false`
    Boolean,
    /// Entries are real numbers; absent positions are `0.0`
    Numeric,
}

/// Concrete hypervector variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorKind {
    /// Dense bit-packed {0,1}
    Binary,
    /// Dense bit-packed {-1,+1}
    Bipolar,
    /// Index/value pairs with a density parameter
    Sparse(SparseDomain),
    /// Dense reals
    Real,
    /// Dense integers
    Int,
    /// Dense reals in [0,1]
    Graded,
    /// Dense reals in [-1,1]
    GradedBipolar,
}

/// Which algebra applies to a vector's elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// XOR bind, majority bundle
    Binary,
    /// Multiplicative bind, additive bundle
    Numeric,
    /// Fuzzy-XOR bind, three-pi bundle
    Graded,
}

impl VectorKind {
    /// Total mapping from variant to element kind
    #[inline]
    pub const fn element_kind(self) -> ElementKind {
        match self {
            VectorKind::Binary => ElementKind::Binary,
            VectorKind::Sparse(SparseDomain::Boolean) => ElementKind::Binary,
            VectorKind::Bipolar
            | VectorKind::Sparse(SparseDomain::Numeric)
            | VectorKind::Real
            | VectorKind::Int => ElementKind::Numeric,
            VectorKind::Graded | VectorKind::GradedBipolar => ElementKind::Graded,
        }
    }

    /// Name used in error messages and logs
    pub const fn name(self) -> &'static str {
        match self {
            VectorKind::Binary => "BinaryHDV",
            VectorKind::Bipolar => "BipolarHDV",
            VectorKind::Sparse(SparseDomain::Boolean) => "SparseHDV{Bool}",
            VectorKind::Sparse(SparseDomain::Numeric) => "SparseHDV{Real}",
            VectorKind::Real => "RealHDV",
            VectorKind::Int => "IntHDV",
            VectorKind::Graded => "GradedHDV",
            VectorKind::GradedBipolar => "GradedBipolarHDV",
        }
    }
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
