//! Bundling (superposition) of hypervector collections
//!
//! The aggregation is selected by [`ElementKind`]:
//!
//! | Element kind | Variant | Aggregation |
//! |---|---|---|
//! | Binary | Binary, Sparse{Bool} | per-position majority, ties per [`EvenResolve`] |
//! | Numeric | Bipolar | sign of the sum, zero sums per [`EvenResolve`] |
//! | Numeric | Sparse{Real}, Int | elementwise sum |
//! | Numeric | Real | elementwise sum scaled to unit norm |
//! | Graded | Graded, GradedBipolar | left fold of the fuzzy three-pi product |

use crate::config::EvenResolve;
use crate::error::{HdcError, Result};
use crate::fuzzy::three_pi;
use crate::kind::{ElementKind, SparseDomain};
use crate::vector::{
    ensure_compatible, BinaryHdv, BipolarHdv, Bits, GradedBipolarHdv, GradedHdv, HyperVector,
    IntHdv, RealHdv, SparseHdv,
};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{trace, warn};

/// Bundles `vectors` with random tie-breaking on the thread-local RNG
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::{bundle, sim, BinaryHdv, HyperVector};
///
/// let vs: Vec<HyperVector> = (0..5).map(|_| BinaryHdv::random(10_000).into()).collect();
/// let b = bundle(&vs).unwrap();
/// // the bundle stays closer to each input than chance
/// assert!(sim(&b, &vs[0]).unwrap() > sim(&vs[1], &vs[0]).unwrap());
/// ```
pub fn bundle(vectors: &[HyperVector]) -> Result<HyperVector> {
    bundle_with(vectors, EvenResolve::Random, &mut rand::thread_rng())
}

/// Bundles `vectors`, resolving majority ties with `policy`
///
/// # Errors
///
/// - [`HdcError::InvalidArgument`] for an empty collection
/// - [`HdcError::DimensionMismatch`] / [`HdcError::KindMismatch`] when the
///   vectors do not all share the first vector's variant and length
pub fn bundle_with<R: Rng + ?Sized>(
    vectors: &[HyperVector],
    policy: EvenResolve,
    rng: &mut R,
) -> Result<HyperVector> {
    let first = vectors
        .first()
        .ok_or_else(|| HdcError::invalid("cannot bundle an empty collection"))?;
    for v in &vectors[1..] {
        ensure_compatible(first, v)?;
    }

    let len = first.len();
    let kind = first.element_kind();
    let out = match kind {
        ElementKind::Binary => bundle_majority(vectors, len, policy, rng),
        ElementKind::Numeric => bundle_sum(vectors, len, policy, rng),
        ElementKind::Graded => bundle_three_pi(vectors),
    }?;

    trace!(
        num_vectors = vectors.len(),
        vector_kind = %first.kind(),
        ?kind,
        %policy,
        "Bundled hypervectors"
    );
    Ok(out)
}

fn unexpected(v: &HyperVector) -> HdcError {
    HdcError::NotImplemented {
        operation: "bundle",
        kind: v.kind(),
    }
}

/// Binary element kind: per-position majority
fn bundle_majority<R: Rng + ?Sized>(
    vectors: &[HyperVector],
    len: usize,
    policy: EvenResolve,
    rng: &mut R,
) -> Result<HyperVector> {
    match &vectors[0] {
        HyperVector::Binary(_) => {
            let sets = collect_variant(vectors, |v| match v {
                HyperVector::Binary(b) => Some(&b.bits),
                _ => None,
            });
            Ok(BinaryHdv::from_bits(majority(&sets, len, policy, rng)).into())
        }
        HyperVector::Sparse(_) => {
            let parts = collect_variant(vectors, |v| match v {
                HyperVector::Sparse(s) => Some(s),
                _ => None,
            });
            Ok(sparse_majority(&parts, len, policy, rng).into())
        }
        other => Err(unexpected(other)),
    }
}

/// Numeric element kind: elementwise sum
///
/// Packed bipolar vectors keep the sign of the sum, which is the majority
/// of their bits; a zero sum is a tie and goes to `policy`.
fn bundle_sum<R: Rng + ?Sized>(
    vectors: &[HyperVector],
    len: usize,
    policy: EvenResolve,
    rng: &mut R,
) -> Result<HyperVector> {
    match &vectors[0] {
        HyperVector::Bipolar(_) => {
            let sets = collect_variant(vectors, |v| match v {
                HyperVector::Bipolar(b) => Some(&b.bits),
                _ => None,
            });
            Ok(BipolarHdv::from_bits(majority(&sets, len, policy, rng)).into())
        }
        HyperVector::Sparse(_) => {
            let parts = collect_variant(vectors, |v| match v {
                HyperVector::Sparse(s) => Some(s),
                _ => None,
            });
            Ok(sparse_sum(&parts, len).into())
        }
        HyperVector::Real(_) => {
            let parts = collect_variant(vectors, |v| match v {
                HyperVector::Real(r) => Some(r),
                _ => None,
            });
            Ok(real_normalized_sum(&parts, len).into())
        }
        HyperVector::Int(_) => {
            let parts = collect_variant(vectors, |v| match v {
                HyperVector::Int(x) => Some(x),
                _ => None,
            });
            let mut data = vec![0i64; len];
            for p in &parts {
                for (acc, &x) in data.iter_mut().zip(&p.data) {
                    *acc += x;
                }
            }
            let multiplicity = parts.iter().map(|p| p.multiplicity).sum();
            Ok(IntHdv::with_multiplicity(data, multiplicity).into())
        }
        other => Err(unexpected(other)),
    }
}

/// Graded element kind: left fold of three-pi
fn bundle_three_pi(vectors: &[HyperVector]) -> Result<HyperVector> {
    match &vectors[0] {
        HyperVector::Graded(_) => {
            let parts = collect_variant(vectors, |v| match v {
                HyperVector::Graded(g) => Some(g.data.as_slice()),
                _ => None,
            });
            Ok(GradedHdv::unbounded(three_pi_fold(&parts)).into())
        }
        // three_pi on stored [0,1] values is three_pi_bipolar on the read-out
        HyperVector::GradedBipolar(_) => {
            let parts = collect_variant(vectors, |v| match v {
                HyperVector::GradedBipolar(g) => Some(g.stored.as_slice()),
                _ => None,
            });
            Ok(GradedBipolarHdv::from_stored(three_pi_fold(&parts)).into())
        }
        other => Err(unexpected(other)),
    }
}

/// Extracts one variant's payload from every vector
///
/// Callers have already checked that all vectors share the first one's
/// variant, so the extractor never misses.
fn collect_variant<'a, T: ?Sized>(
    vectors: &'a [HyperVector],
    extract: impl Fn(&'a HyperVector) -> Option<&'a T>,
) -> Vec<&'a T> {
    vectors.iter().filter_map(extract).collect()
}

/// Per-position majority over packed bits
///
/// A position is set when more than half of the inputs set it. With an
/// even count, exact ties go to `policy`.
fn majority<R: Rng + ?Sized>(
    sets: &[&Bits],
    len: usize,
    policy: EvenResolve,
    rng: &mut R,
) -> Bits {
    let n = sets.len();
    let words = len.div_ceil(64);
    let mut out = Vec::with_capacity(words);

    // Word-level counting: O(n * words) instead of O(n * len) bit lookups
    for word_idx in 0..words {
        let mut counts = [0usize; 64];
        for bits in sets {
            let word = bits.as_raw_slice()[word_idx];
            for (bit_pos, count) in counts.iter_mut().enumerate() {
                *count += ((word >> bit_pos) & 1) as usize;
            }
        }

        let ties = if n % 2 == 0 {
            tie_word(policy, rng)
        } else {
            0
        };

        let mut result_word = 0u64;
        for (bit_pos, &count) in counts.iter().enumerate() {
            let doubled = 2 * count;
            if doubled > n || (doubled == n && (ties >> bit_pos) & 1 == 1) {
                result_word |= 1u64 << bit_pos;
            }
        }
        out.push(result_word);
    }

    let mut bits = Bits::from_vec(out);
    bits.truncate(len);
    bits
}

fn tie_word<R: Rng + ?Sized>(policy: EvenResolve, rng: &mut R) -> u64 {
    match policy {
        EvenResolve::Random => rng.gen(),
        EvenResolve::Positive => u64::MAX,
        EvenResolve::Negative => 0,
    }
}

fn sparse_majority<R: Rng + ?Sized>(
    parts: &[&SparseHdv],
    len: usize,
    policy: EvenResolve,
    rng: &mut R,
) -> SparseHdv {
    let n = parts.len();
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for p in parts {
        for &i in p.entries.keys() {
            *counts.entry(i).or_insert(0) += 1;
        }
    }

    let entries = counts
        .into_iter()
        .filter(|&(_, count)| {
            let doubled = 2 * count;
            doubled > n
                || (doubled == n
                    && match policy {
                        EvenResolve::Random => rng.gen_bool(0.5),
                        EvenResolve::Positive => true,
                        EvenResolve::Negative => false,
                    })
        })
        .map(|(i, _)| (i, 1.0))
        .collect();
    SparseHdv::from_parts(len, SparseDomain::Boolean, entries)
}

fn sparse_sum(parts: &[&SparseHdv], len: usize) -> SparseHdv {
    let mut entries: BTreeMap<usize, f64> = BTreeMap::new();
    for p in parts {
        for (&i, &v) in &p.entries {
            *entries.entry(i).or_insert(0.0) += v;
        }
    }
    entries.retain(|_, v| *v != 0.0);
    SparseHdv::from_parts(len, SparseDomain::Numeric, entries)
}

fn real_normalized_sum(parts: &[&RealHdv], len: usize) -> RealHdv {
    let mut data = vec![0.0f64; len];
    for p in parts {
        for (acc, &x) in data.iter_mut().zip(&p.data) {
            *acc += x;
        }
    }

    let norm = data.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in data.iter_mut() {
            *x /= norm;
        }
    } else {
        warn!(len, "Bundle of real hypervectors has zero norm; left unnormalized");
    }

    let multiplicity = parts.iter().map(|p| p.multiplicity).sum();
    RealHdv::with_multiplicity(data, multiplicity)
}

fn three_pi_fold(parts: &[&[f64]]) -> Vec<f64> {
    let mut acc = parts[0].to_vec();
    for p in &parts[1..] {
        for (a, &x) in acc.iter_mut().zip(p.iter()) {
            *a = three_pi(*a, x);
        }
    }
    acc
}
