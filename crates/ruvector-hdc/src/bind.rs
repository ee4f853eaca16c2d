//! Binding and unbinding
//!
//! The formula is selected by [`ElementKind`]:
//!
//! | Element kind | bind | unbind |
//! |---|---|---|
//! | Binary | XOR | same as bind |
//! | Numeric | elementwise product | same as bind |
//! | Graded | fuzzy XOR | inverse fuzzy XOR |
//!
//! XOR and multiplication by ±1 are involutions, so `unbind(bind(u, v), v) == u`
//! for binary and bipolar data. Fuzzy XOR is not: graded unbind recovers
//! `u` from `bind(u, v)` and the original `v`, but `unbind` applied twice
//! does not return to the start. Recovered graded values are clamped to
//! [0,1], so unbinding a `z` that was never bound with `v` still yields a
//! vector inside the graded domain. Graded bind is also not associative, so
//! [`bind_all`] depends on operand order for graded vectors.

use crate::error::{HdcError, Result};
use crate::fuzzy::{fuzzy_xor, inverse_fuzzy_xor};
use crate::kind::{ElementKind, SparseDomain};
use crate::vector::{
    ensure_compatible, BinaryHdv, BipolarHdv, GradedBipolarHdv, GradedHdv, HyperVector, IntHdv,
    RealHdv, SparseHdv,
};
use std::collections::BTreeMap;
use tracing::trace;

/// Binds two hypervectors of the same variant and length
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::{bind, unbind, BinaryHdv, HyperVector};
///
/// let a: HyperVector = BinaryHdv::random(10_000).into();
/// let b: HyperVector = BinaryHdv::random(10_000).into();
/// let bound = bind(&a, &b).unwrap();
/// assert_eq!(unbind(&bound, &b).unwrap(), a);
/// ```
pub fn bind(u: &HyperVector, v: &HyperVector) -> Result<HyperVector> {
    ensure_compatible(u, v)?;
    let kind = u.element_kind();
    let out = match kind {
        ElementKind::Binary => bind_exclusive_or(u, v),
        ElementKind::Numeric => bind_product(u, v),
        ElementKind::Graded => bind_fuzzy_xor(u, v),
    }?;
    trace!(vector_kind = %u.kind(), ?kind, len = u.len(), "Bound hypervectors");
    Ok(out)
}

/// Recovers `u` from `z = bind(u, v)` and `v`
///
/// # Errors
///
/// [`HdcError::UnrecoverableUnbind`] when a graded `v` holds 0.5 (graded
/// scale) at some position, since fuzzy XOR with 0.5 erases the other operand.
pub fn unbind(z: &HyperVector, v: &HyperVector) -> Result<HyperVector> {
    ensure_compatible(z, v)?;
    match z.element_kind() {
        ElementKind::Binary | ElementKind::Numeric => bind(z, v),
        ElementKind::Graded => unbind_fuzzy_xor(z, v),
    }
}

/// Left fold of [`bind`] over `vectors`
pub fn bind_all(vectors: &[HyperVector]) -> Result<HyperVector> {
    let (first, rest) = vectors
        .split_first()
        .ok_or_else(|| HdcError::invalid("bind_all requires at least one vector"))?;

    let mut result = first.clone();
    for v in rest {
        result = bind(&result, v)?;
    }
    Ok(result)
}

fn mismatch(u: &HyperVector, v: &HyperVector) -> HdcError {
    HdcError::KindMismatch {
        expected: u.kind(),
        actual: v.kind(),
    }
}

fn bind_exclusive_or(u: &HyperVector, v: &HyperVector) -> Result<HyperVector> {
    match (u, v) {
        (HyperVector::Binary(a), HyperVector::Binary(b)) => Ok(BinaryHdv::from_bits(
            a.bits.clone() ^ b.bits.clone(),
        )
        .into()),
        (HyperVector::Sparse(a), HyperVector::Sparse(b)) => {
            let entries: BTreeMap<usize, f64> = a
                .entries
                .keys()
                .filter(|i| !b.entries.contains_key(*i))
                .chain(b.entries.keys().filter(|i| !a.entries.contains_key(*i)))
                .map(|&i| (i, 1.0))
                .collect();
            Ok(SparseHdv::from_parts(a.len, SparseDomain::Boolean, entries).into())
        }
        _ => Err(mismatch(u, v)),
    }
}

fn bind_product(u: &HyperVector, v: &HyperVector) -> Result<HyperVector> {
    match (u, v) {
        // +1 is a set bit, so the sign product is XNOR
        (HyperVector::Bipolar(a), HyperVector::Bipolar(b)) => {
            Ok(BipolarHdv::from_bits(!(a.bits.clone() ^ b.bits.clone())).into())
        }
        (HyperVector::Sparse(a), HyperVector::Sparse(b)) => {
            let entries: BTreeMap<usize, f64> = a
                .entries
                .iter()
                .filter_map(|(i, x)| b.entries.get(i).map(|y| (*i, x * y)))
                .filter(|(_, p)| *p != 0.0)
                .collect();
            Ok(SparseHdv::from_parts(a.len, SparseDomain::Numeric, entries).into())
        }
        (HyperVector::Real(a), HyperVector::Real(b)) => Ok(RealHdv::from_vec(
            a.data.iter().zip(&b.data).map(|(x, y)| x * y).collect(),
        )
        .into()),
        (HyperVector::Int(a), HyperVector::Int(b)) => Ok(IntHdv::from_vec(
            a.data.iter().zip(&b.data).map(|(x, y)| x * y).collect(),
        )
        .into()),
        _ => Err(mismatch(u, v)),
    }
}

fn bind_fuzzy_xor(u: &HyperVector, v: &HyperVector) -> Result<HyperVector> {
    match (u, v) {
        (HyperVector::Graded(a), HyperVector::Graded(b)) => {
            Ok(GradedHdv::unbounded(zip_with(&a.data, &b.data, fuzzy_xor)).into())
        }
        // stored values are already on [0,1], which is what the bipolar wrapper maps to
        (HyperVector::GradedBipolar(a), HyperVector::GradedBipolar(b)) => {
            Ok(GradedBipolarHdv::from_stored(zip_with(&a.stored, &b.stored, fuzzy_xor)).into())
        }
        _ => Err(mismatch(u, v)),
    }
}

fn unbind_fuzzy_xor(z: &HyperVector, v: &HyperVector) -> Result<HyperVector> {
    match (z, v) {
        (HyperVector::Graded(a), HyperVector::Graded(b)) => {
            Ok(GradedHdv::unbounded(inverse_elementwise(&a.data, &b.data)?).into())
        }
        (HyperVector::GradedBipolar(a), HyperVector::GradedBipolar(b)) => Ok(
            GradedBipolarHdv::from_stored(inverse_elementwise(&a.stored, &b.stored)?).into(),
        ),
        _ => Err(mismatch(z, v)),
    }
}

fn zip_with(a: &[f64], b: &[f64], f: fn(f64, f64) -> f64) -> Vec<f64> {
    a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
}

fn inverse_elementwise(z: &[f64], known: &[f64]) -> Result<Vec<f64>> {
    z.iter()
        .zip(known)
        .enumerate()
        .map(|(index, (&zi, &xi))| {
            inverse_fuzzy_xor(zi, xi)
                .map(|y| y.clamp(0.0, 1.0))
                .ok_or(HdcError::UnrecoverableUnbind { index })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::VectorKind;
    use approx::assert_abs_diff_eq;

    fn assert_close(a: &HyperVector, b: &HyperVector, eps: f64) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.to_dense().iter().zip(b.to_dense()) {
            assert_abs_diff_eq!(*x, y, epsilon = eps);
        }
    }

    #[test]
    fn test_binary_bind_is_xor() {
        let a: HyperVector = BinaryHdv::from_bools(&[true, true, false, false]).into();
        let b: HyperVector = BinaryHdv::from_bools(&[true, false, true, false]).into();
        let bound = bind(&a, &b).unwrap();
        assert_eq!(bound.to_dense(), vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_binary_bind_commutative_and_self_inverse() {
        let a: HyperVector = BinaryHdv::random(10_000).into();
        let b: HyperVector = BinaryHdv::random(10_000).into();
        assert_eq!(bind(&a, &b).unwrap(), bind(&b, &a).unwrap());
        assert_eq!(unbind(&bind(&a, &b).unwrap(), &b).unwrap(), a);
    }

    #[test]
    fn test_bipolar_bind_is_sign_product() {
        let a: HyperVector = BipolarHdv::from_signs(&[1, 1, -1, -1]).into();
        let b: HyperVector = BipolarHdv::from_signs(&[1, -1, 1, -1]).into();
        let bound = bind(&a, &b).unwrap();
        assert_eq!(bound.to_dense(), vec![1.0, -1.0, -1.0, 1.0]);
        assert_eq!(unbind(&bound, &b).unwrap(), a);
    }

    #[test]
    fn test_int_bind_self_inverse() {
        let a: HyperVector = IntHdv::random(1_000).into();
        let b: HyperVector = IntHdv::random(1_000).into();
        assert_eq!(unbind(&bind(&a, &b).unwrap(), &b).unwrap(), a);
    }

    #[test]
    fn test_real_bind_is_product() {
        let a: HyperVector = RealHdv::from_vec(vec![2.0, -1.5]).into();
        let b: HyperVector = RealHdv::from_vec(vec![0.5, 2.0]).into();
        assert_eq!(bind(&a, &b).unwrap().to_dense(), vec![1.0, -3.0]);
    }

    #[test]
    fn test_sparse_boolean_bind_is_symmetric_difference() {
        let a: HyperVector = SparseHdv::from_indices(10, &[1, 2, 3]).unwrap().into();
        let b: HyperVector = SparseHdv::from_indices(10, &[3, 4]).unwrap().into();
        let bound = bind(&a, &b).unwrap();
        match &bound {
            HyperVector::Sparse(s) => {
                assert_eq!(s.entries().map(|(i, _)| i).collect::<Vec<_>>(), vec![1, 2, 4])
            }
            other => panic!("unexpected variant {:?}", other.kind()),
        }
        assert_eq!(unbind(&bound, &b).unwrap().to_dense(), a.to_dense());
    }

    #[test]
    fn test_sparse_numeric_bind_is_product() {
        let a: HyperVector = SparseHdv::from_pairs(5, &[(0, 2.0), (2, 3.0)]).unwrap().into();
        let b: HyperVector = SparseHdv::from_pairs(5, &[(2, -1.0), (4, 1.0)]).unwrap().into();
        let bound = bind(&a, &b).unwrap();
        assert_eq!(bound.to_dense(), vec![0.0, 0.0, -3.0, 0.0, 0.0]);
        assert_eq!(bound.kind(), VectorKind::Sparse(SparseDomain::Numeric));
    }

    #[test]
    fn test_graded_unbind_recovers_operand() {
        let u: HyperVector = GradedHdv::random(1_000, 0.0, 1.0).unwrap().into();
        let v: HyperVector = GradedHdv::random(1_000, 0.0, 0.45).unwrap().into();
        let z = bind(&u, &v).unwrap();
        assert_close(&unbind(&z, &v).unwrap(), &u, 1e-9);
    }

    #[test]
    fn test_graded_unbind_is_not_an_involution() {
        let u: HyperVector = GradedHdv::from_vec(vec![0.3, 0.8, 0.1]).unwrap().into();
        let v: HyperVector = GradedHdv::from_vec(vec![0.2, 0.9, 0.6]).unwrap().into();
        let twice = unbind(&unbind(&u, &v).unwrap(), &v).unwrap();
        let drift: f64 = twice
            .to_dense()
            .iter()
            .zip(u.to_dense())
            .map(|(a, b)| (a - b).abs())
            .sum();
        assert!(drift > 1e-3, "unbind behaved as involution");
    }

    #[test]
    fn test_graded_bipolar_unbind_recovers_operand() {
        let u: HyperVector = GradedBipolarHdv::random(500, -1.0, 1.0).unwrap().into();
        // known operand kept away from 0.0, where the inverse degenerates
        let known: Vec<f64> = (0..500)
            .map(|i| {
                let magnitude = 0.2 + 0.8 * (i as f64 / 500.0);
                if i % 2 == 0 {
                    magnitude
                } else {
                    -magnitude
                }
            })
            .collect();
        let v: HyperVector = GradedBipolarHdv::from_bipolar(&known).unwrap().into();
        let z = bind(&u, &v).unwrap();
        assert_close(&unbind(&z, &v).unwrap(), &u, 1e-9);
    }

    #[test]
    fn test_graded_unbind_stays_in_domain() {
        let z: HyperVector = GradedHdv::from_vec(vec![0.95, 0.0, 0.5]).unwrap().into();
        let v: HyperVector = GradedHdv::from_vec(vec![0.2, 0.9, 0.1]).unwrap().into();
        let out = unbind(&z, &v).unwrap().to_dense();
        assert_eq!(out[0], 1.0);
        assert!(out.iter().all(|x| (0.0..=1.0).contains(x)), "{:?}", out);

        let z: HyperVector = GradedBipolarHdv::from_bipolar(&[0.9]).unwrap().into();
        let v: HyperVector = GradedBipolarHdv::from_bipolar(&[-0.6]).unwrap().into();
        let once = unbind(&z, &v).unwrap();
        assert_eq!(once.to_dense(), vec![1.0]);
        let twice = unbind(&once, &v).unwrap();
        assert!(twice.to_dense().iter().all(|x| (-1.0..=1.0).contains(x)));

        // arbitrary pairs, none produced by bind
        for _ in 0..20 {
            let z: HyperVector = GradedHdv::random(200, 0.0, 1.0).unwrap().into();
            let v: HyperVector = GradedHdv::random(200, 0.0, 0.49).unwrap().into();
            let out = unbind(&z, &v).unwrap();
            assert!(out.to_dense().iter().all(|x| (0.0..=1.0).contains(x)));
            match out {
                HyperVector::Graded(g) => {
                    assert!(GradedHdv::from_vec(g.as_slice().to_vec()).is_ok())
                }
                other => panic!("unexpected variant {:?}", other.kind()),
            }
        }
    }

    #[test]
    fn test_graded_unbind_half_fails() {
        let z: HyperVector = GradedHdv::from_vec(vec![0.4, 0.7]).unwrap().into();
        let v: HyperVector = GradedHdv::from_vec(vec![0.1, 0.5]).unwrap().into();
        assert_eq!(
            unbind(&z, &v).unwrap_err(),
            HdcError::UnrecoverableUnbind { index: 1 }
        );

        let z: HyperVector = GradedBipolarHdv::from_bipolar(&[0.4]).unwrap().into();
        let v: HyperVector = GradedBipolarHdv::from_bipolar(&[0.0]).unwrap().into();
        assert!(matches!(
            unbind(&z, &v),
            Err(HdcError::UnrecoverableUnbind { index: 0 })
        ));
    }

    #[test]
    fn test_mismatched_operands_rejected() {
        let a: HyperVector = BinaryHdv::random(64).into();
        let b: HyperVector = BinaryHdv::random(65).into();
        let c: HyperVector = BipolarHdv::random(64).into();
        assert!(matches!(
            bind(&a, &b),
            Err(HdcError::DimensionMismatch { .. })
        ));
        assert!(matches!(bind(&a, &c), Err(HdcError::KindMismatch { .. })));
        assert!(unbind(&a, &c).unwrap_err().is_mismatch());
    }

    #[test]
    fn test_bind_all() {
        let vs: Vec<HyperVector> = (0..3).map(|_| BinaryHdv::random(256).into()).collect();
        let folded = bind_all(&vs).unwrap();
        let manual = bind(&bind(&vs[0], &vs[1]).unwrap(), &vs[2]).unwrap();
        assert_eq!(folded, manual);
        assert_eq!(bind_all(&vs[..1]).unwrap(), vs[0]);
        assert!(matches!(bind_all(&[]), Err(HdcError::InvalidArgument(_))));
    }
}
