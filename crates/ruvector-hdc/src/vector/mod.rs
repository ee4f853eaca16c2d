//! Hypervector representations
//!
//! Each concrete variant lives in its own type; [`HyperVector`] is the
//! closed sum over all of them that the algebra dispatches on.

mod binary;
mod dense;
mod graded;
mod sparse;

pub use binary::{BinaryHdv, BipolarHdv, Bits};
pub use dense::{IntHdv, RealHdv};
pub use graded::{GradedBipolarHdv, GradedHdv};
pub use sparse::SparseHdv;

pub(crate) use binary::{check_len, mismatches};

use crate::error::{HdcError, Result};
use crate::kind::{ElementKind, VectorKind};

/// Any hypervector
#[derive(Debug, Clone, PartialEq)]
pub enum HyperVector {
    /// {0,1}, bit-packed
    Binary(BinaryHdv),
    /// {-1,+1}, bit-packed
    Bipolar(BipolarHdv),
    /// Index/value pairs
    Sparse(SparseHdv),
    /// Dense reals
    Real(RealHdv),
    /// Dense integers
    Int(IntHdv),
    /// Fuzzy truth values in [0,1]
    Graded(GradedHdv),
    /// Fuzzy bipolar values in [-1,1]
    GradedBipolar(GradedBipolarHdv),
}

impl HyperVector {
    /// Variant tag
    pub fn kind(&self) -> VectorKind {
        match self {
            HyperVector::Binary(_) => VectorKind::Binary,
            HyperVector::Bipolar(_) => VectorKind::Bipolar,
            HyperVector::Sparse(v) => VectorKind::Sparse(v.domain),
            HyperVector::Real(_) => VectorKind::Real,
            HyperVector::Int(_) => VectorKind::Int,
            HyperVector::Graded(_) => VectorKind::Graded,
            HyperVector::GradedBipolar(_) => VectorKind::GradedBipolar,
        }
    }

    /// Which algebra applies to the elements
    #[inline]
    pub fn element_kind(&self) -> ElementKind {
        self.kind().element_kind()
    }

    /// Dimension N
    pub fn len(&self) -> usize {
        match self {
            HyperVector::Binary(v) => v.len(),
            HyperVector::Bipolar(v) => v.len(),
            HyperVector::Sparse(v) => v.len(),
            HyperVector::Real(v) => v.len(),
            HyperVector::Int(v) => v.len(),
            HyperVector::Graded(v) => v.len(),
            HyperVector::GradedBipolar(v) => v.len(),
        }
    }

    /// True when N is zero
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index` embedded in ℝ (`false`→0, `true`→1)
    pub fn get(&self, index: usize) -> Option<f64> {
        match self {
            HyperVector::Binary(v) => v.get(index).map(|b| if b { 1.0 } else { 0.0 }),
            HyperVector::Bipolar(v) => v.get(index).map(f64::from),
            HyperVector::Sparse(v) => v.get(index),
            HyperVector::Real(v) => v.get(index),
            HyperVector::Int(v) => v.get(index).map(|x| x as f64),
            HyperVector::Graded(v) => v.get(index),
            HyperVector::GradedBipolar(v) => v.get(index),
        }
    }

    /// Sum of the elements, using each variant's closed form
    pub fn sum(&self) -> f64 {
        match self {
            HyperVector::Binary(v) => v.sum() as f64,
            HyperVector::Bipolar(v) => v.sum() as f64,
            HyperVector::Sparse(v) => v.sum(),
            HyperVector::Real(v) => v.sum(),
            HyperVector::Int(v) => v.sum() as f64,
            HyperVector::Graded(v) => v.sum(),
            HyperVector::GradedBipolar(v) => v.sum(),
        }
    }

    /// Euclidean norm of the real embedding
    pub fn norm(&self) -> f64 {
        match self {
            HyperVector::Binary(v) => v.norm(),
            HyperVector::Bipolar(v) => v.norm(),
            HyperVector::Sparse(v) => v.norm(),
            HyperVector::Real(v) => v.norm(),
            HyperVector::Int(v) => v.norm(),
            HyperVector::Graded(v) => v.norm(),
            HyperVector::GradedBipolar(v) => v.norm(),
        }
    }

    /// Dense copy of the real embedding
    pub fn to_dense(&self) -> Vec<f64> {
        match self {
            HyperVector::Sparse(v) => v.to_dense(),
            HyperVector::Real(v) => v.data.clone(),
            HyperVector::Graded(v) => v.data.clone(),
            HyperVector::GradedBipolar(v) => v.values(),
            _ => (0..self.len()).filter_map(|i| self.get(i)).collect(),
        }
    }

    /// Folds `other` into `self` for the counter-carrying variants
    pub fn accumulate(&mut self, other: &HyperVector) -> Result<()> {
        ensure_compatible(self, other)?;
        match (self, other) {
            (HyperVector::Real(acc), HyperVector::Real(v)) => acc.accumulate(v),
            (HyperVector::Int(acc), HyperVector::Int(v)) => acc.accumulate(v),
            (acc, _) => Err(HdcError::NotImplemented {
                operation: "accumulate",
                kind: acc.kind(),
            }),
        }
    }
}

/// Both operands must be the same variant with the same length
pub(crate) fn ensure_compatible(u: &HyperVector, v: &HyperVector) -> Result<()> {
    if u.kind() != v.kind() {
        return Err(HdcError::KindMismatch {
            expected: u.kind(),
            actual: v.kind(),
        });
    }
    check_len(u.len(), v.len())
}

macro_rules! impl_from_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for HyperVector {
                fn from(v: $ty) -> Self {
                    HyperVector::$variant(v)
                }
            }
        )*
    };
}

impl_from_variant! {
    Binary => BinaryHdv,
    Bipolar => BipolarHdv,
    Sparse => SparseHdv,
    Real => RealHdv,
    Int => IntHdv,
    Graded => GradedHdv,
    GradedBipolar => GradedBipolarHdv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SparseDomain;

    #[test]
    fn test_kind_and_len() {
        let vectors: Vec<HyperVector> = vec![
            BinaryHdv::random(100).into(),
            BipolarHdv::random(100).into(),
            SparseHdv::random(100, SparseDomain::Boolean, 0.1).unwrap().into(),
            RealHdv::random(100).into(),
            IntHdv::random(100).into(),
            GradedHdv::random(100, 0.0, 1.0).unwrap().into(),
            GradedBipolarHdv::random(100, -1.0, 1.0).unwrap().into(),
        ];
        for v in &vectors {
            assert_eq!(v.len(), 100);
            assert_eq!(v.to_dense().len(), 100);
        }
        assert_eq!(vectors[2].kind(), VectorKind::Sparse(SparseDomain::Boolean));
        assert_eq!(vectors[6].element_kind(), ElementKind::Graded);
    }

    #[test]
    fn test_embedded_get() {
        let v: HyperVector = BinaryHdv::from_bools(&[true, false]).into();
        assert_eq!(v.get(0), Some(1.0));
        assert_eq!(v.get(1), Some(0.0));
        assert_eq!(v.get(2), None);

        let v: HyperVector = BipolarHdv::from_signs(&[-1, 1]).into();
        assert_eq!(v.to_dense(), vec![-1.0, 1.0]);
        assert_eq!(v.sum(), 0.0);
    }

    #[test]
    fn test_sum_matches_dense_fold() {
        let v: HyperVector = BipolarHdv::random(777).into();
        let folded: f64 = v.to_dense().iter().sum();
        assert_eq!(v.sum(), folded);

        let v: HyperVector = BinaryHdv::random(777).into();
        let folded: f64 = v.to_dense().iter().sum();
        assert_eq!(v.sum(), folded);
    }

    #[test]
    fn test_ensure_compatible() {
        let a: HyperVector = RealHdv::random(10).into();
        let b: HyperVector = RealHdv::random(11).into();
        let c: HyperVector = IntHdv::random(10).into();
        assert!(matches!(
            ensure_compatible(&a, &b),
            Err(HdcError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            ensure_compatible(&a, &c),
            Err(HdcError::KindMismatch { .. })
        ));
        assert!(ensure_compatible(&a, &a).is_ok());
    }

    #[test]
    fn test_accumulate_dispatch() {
        let mut acc: HyperVector = IntHdv::from_vec(vec![1, 1]).into();
        acc.accumulate(&IntHdv::from_vec(vec![1, -1]).into()).unwrap();
        assert_eq!(acc.to_dense(), vec![2.0, 0.0]);

        let mut bin: HyperVector = BinaryHdv::zeros(2).into();
        let err = bin.accumulate(&BinaryHdv::zeros(2).into()).unwrap_err();
        assert!(matches!(err, HdcError::NotImplemented { .. }));
    }
}
