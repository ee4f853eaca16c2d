//! Circular shift (permutation) of hypervectors
//!
//! Rotation moves every element toward higher indices:
//! `shift(v, k)[(i + k) mod N] == v[i]`. Shifting by `N − k` undoes a
//! shift by `k`.

use crate::vector::HyperVector;
use std::mem;

/// Returns `v` rotated by `k` positions
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::{shift, BinaryHdv, HyperVector};
///
/// let v: HyperVector = BinaryHdv::from_bools(&[true, false, false, false]).into();
/// let s = shift(&v, 1);
/// assert_eq!(s.to_dense(), vec![0.0, 1.0, 0.0, 0.0]);
/// assert_eq!(shift(&s, 3), v);
/// ```
pub fn shift(v: &HyperVector, k: usize) -> HyperVector {
    let mut out = v.clone();
    shift_in_place(&mut out, k);
    out
}

/// Rotates `v` by `k` positions without allocating a new vector
pub fn shift_in_place(v: &mut HyperVector, k: usize) {
    let len = v.len();
    if len == 0 {
        return;
    }
    let k = k % len;
    if k == 0 {
        return;
    }

    match v {
        HyperVector::Binary(b) => b.bits.rotate_right(k),
        HyperVector::Bipolar(b) => b.bits.rotate_right(k),
        HyperVector::Sparse(s) => {
            s.entries = mem::take(&mut s.entries)
                .into_iter()
                .map(|(i, x)| ((i + k) % len, x))
                .collect();
        }
        HyperVector::Real(r) => r.data.rotate_right(k),
        HyperVector::Int(x) => x.data.rotate_right(k),
        HyperVector::Graded(g) => g.data.rotate_right(k),
        HyperVector::GradedBipolar(g) => g.stored.rotate_right(k),
    }
}
