//! Similarity and distance metrics
//!
//! [`sim`] picks the metric by [`ElementKind`]:
//!
//! - Binary (Binary, Sparse{Bool}): Tanimoto coefficient on the {0,1} embedding
//! - Numeric and Graded: cosine similarity; packed bipolar vectors compute
//!   it as `(2m − N) / N` where `m` counts agreeing bits
//!
//! Every metric returns 1.0 for a vector compared with itself, including
//! all-zero vectors.

use crate::error::{HdcError, Result};
use crate::kind::ElementKind;
use crate::vector::{check_len, ensure_compatible, mismatches, Bits, HyperVector, SparseHdv};
use std::cmp::Ordering;

/// Similarity of two hypervectors of the same variant and length
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::{sim, BipolarHdv, HyperVector};
///
/// let a: HyperVector = BipolarHdv::random(10_000).into();
/// let b: HyperVector = BipolarHdv::random(10_000).into();
/// assert_eq!(sim(&a, &a).unwrap(), 1.0);
/// assert!(sim(&a, &b).unwrap().abs() < 0.1);
/// ```
pub fn sim(u: &HyperVector, v: &HyperVector) -> Result<f64> {
    ensure_compatible(u, v)?;
    match u.element_kind() {
        ElementKind::Binary => tanimoto_similarity(u, v),
        ElementKind::Numeric | ElementKind::Graded => cosine_similarity(u, v),
    }
}

fn tanimoto_similarity(u: &HyperVector, v: &HyperVector) -> Result<f64> {
    match (u, v) {
        (HyperVector::Binary(a), HyperVector::Binary(b)) => Ok(tanimoto(&a.bits, &b.bits)),
        (HyperVector::Sparse(a), HyperVector::Sparse(b)) => Ok(sparse_tanimoto(a, b)),
        _ => Err(kind_mismatch(u, v)),
    }
}

fn cosine_similarity(u: &HyperVector, v: &HyperVector) -> Result<f64> {
    match (u, v) {
        (HyperVector::Bipolar(a), HyperVector::Bipolar(b)) => {
            Ok(bipolar_agreement(&a.bits, &b.bits))
        }
        (HyperVector::Sparse(a), HyperVector::Sparse(b)) => Ok(sparse_cosine(a, b)),
        (HyperVector::Real(a), HyperVector::Real(b)) => Ok(cosine(&a.data, &b.data)),
        (HyperVector::Graded(a), HyperVector::Graded(b)) => Ok(cosine(&a.data, &b.data)),
        (HyperVector::Int(_), HyperVector::Int(_))
        | (HyperVector::GradedBipolar(_), HyperVector::GradedBipolar(_)) => {
            Ok(cosine(&u.to_dense(), &v.to_dense()))
        }
        _ => Err(kind_mismatch(u, v)),
    }
}

fn kind_mismatch(u: &HyperVector, v: &HyperVector) -> HdcError {
    HdcError::KindMismatch {
        expected: u.kind(),
        actual: v.kind(),
    }
}

/// Curried [`sim`]: fixes the probe and returns a function of the candidate
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::{similarity_to, RealHdv, HyperVector};
///
/// let probe: HyperVector = RealHdv::random(1_000).into();
/// let pool: Vec<HyperVector> = (0..4).map(|_| RealHdv::random(1_000).into()).collect();
/// let scores: Vec<f64> = pool.iter().map(similarity_to(&probe)).collect::<Result<_, _>>().unwrap();
/// assert_eq!(scores.len(), 4);
/// ```
pub fn similarity_to(probe: &HyperVector) -> impl Fn(&HyperVector) -> Result<f64> + '_ {
    move |candidate| sim(probe, candidate)
}

/// Fraction of agreeing positions: `1 − mismatches / N`
///
/// Works on any pair of equal-length sequences; two empty sequences are
/// identical.
pub fn hamming_similarity<T: PartialEq>(a: &[T], b: &[T]) -> Result<f64> {
    check_len(a.len(), b.len())?;
    if a.is_empty() {
        return Ok(1.0);
    }
    let diff = a.iter().zip(b).filter(|(x, y)| x != y).count();
    Ok(1.0 - diff as f64 / a.len() as f64)
}

/// Hamming similarity of two hypervectors, comparing element values
pub fn hamming(u: &HyperVector, v: &HyperVector) -> Result<f64> {
    ensure_compatible(u, v)?;
    match (u, v) {
        (HyperVector::Binary(a), HyperVector::Binary(b)) => {
            Ok(bit_agreement(&a.bits, &b.bits))
        }
        (HyperVector::Bipolar(a), HyperVector::Bipolar(b)) => {
            Ok(bit_agreement(&a.bits, &b.bits))
        }
        _ => hamming_similarity(&u.to_dense(), &v.to_dense()),
    }
}

/// Number of differing positions between two bit-packed vectors
///
/// # Errors
///
/// [`HdcError::NotImplemented`] for variants without packed bit storage.
pub fn hamming_distance(u: &HyperVector, v: &HyperVector) -> Result<usize> {
    ensure_compatible(u, v)?;
    match (u, v) {
        (HyperVector::Binary(a), HyperVector::Binary(b)) => Ok(mismatches(&a.bits, &b.bits)),
        (HyperVector::Bipolar(a), HyperVector::Bipolar(b)) => Ok(mismatches(&a.bits, &b.bits)),
        _ => Err(HdcError::NotImplemented {
            operation: "hamming_distance",
            kind: u.kind(),
        }),
    }
}

/// Cosine similarity
///
/// Two zero-norm operands are identical and score 1.0; a zero-norm operand
/// against a non-zero one scores 0.0.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    cosine_from_parts(dot, norm_a.sqrt(), norm_b.sqrt())
}

#[inline]
fn cosine_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    match (norm_a == 0.0, norm_b == 0.0) {
        (true, true) => 1.0,
        (false, false) => dot / (norm_a * norm_b),
        _ => 0.0,
    }
}

/// Tanimoto coefficient `|a∧b| / (|a| + |b| − |a∧b|)`; 1.0 for two all-zero vectors
pub fn tanimoto(a: &Bits, b: &Bits) -> f64 {
    let both = (a.clone() & b.clone()).count_ones();
    let union = a.count_ones() + b.count_ones() - both;
    if union == 0 {
        1.0
    } else {
        both as f64 / union as f64
    }
}

fn bipolar_agreement(a: &Bits, b: &Bits) -> f64 {
    let n = a.len();
    if n == 0 {
        return 1.0;
    }
    let m = n - mismatches(a, b);
    (2.0 * m as f64 - n as f64) / n as f64
}

fn bit_agreement(a: &Bits, b: &Bits) -> f64 {
    let n = a.len();
    if n == 0 {
        return 1.0;
    }
    1.0 - mismatches(a, b) as f64 / n as f64
}

fn sparse_tanimoto(a: &SparseHdv, b: &SparseHdv) -> f64 {
    let both = a
        .entries
        .keys()
        .filter(|i| b.entries.contains_key(*i))
        .count();
    let union = a.nnz() + b.nnz() - both;
    if union == 0 {
        1.0
    } else {
        both as f64 / union as f64
    }
}

fn sparse_cosine(a: &SparseHdv, b: &SparseHdv) -> f64 {
    let dot: f64 = a
        .entries
        .iter()
        .filter_map(|(i, x)| b.entries.get(i).map(|y| x * y))
        .sum();
    cosine_from_parts(dot, a.norm(), b.norm())
}

/// Similarity of `query` to every candidate, in order
pub fn batch_similarities(query: &HyperVector, candidates: &[HyperVector]) -> Result<Vec<f64>> {
    candidates.iter().map(similarity_to(query)).collect()
}

/// The `k` most similar candidates as `(index, similarity)`, best first
pub fn top_k_similar(
    query: &HyperVector,
    candidates: &[HyperVector],
    k: usize,
) -> Result<Vec<(usize, f64)>> {
    let mut scored: Vec<(usize, f64)> = batch_similarities(query, candidates)?
        .into_iter()
        .enumerate()
        .collect();

    scored.sort_by(|a, b| by_score_desc(a.1, b.1));
    scored.truncate(k);
    Ok(scored)
}

/// Descending total order on scores; NaN sorts after every number
pub(crate) fn by_score_desc(a: f64, b: f64) -> Ordering {
    let key = |x: f64| if x.is_nan() { f64::NEG_INFINITY } else { x };
    key(b).total_cmp(&key(a))
}

/// Symmetric matrix with `result[i][j] = sim(vectors[i], vectors[j])`
pub fn pairwise_similarities(vectors: &[HyperVector]) -> Result<Vec<Vec<f64>>> {
    let n = vectors.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        matrix[i][i] = sim(&vectors[i], &vectors[i])?;
        for j in (i + 1)..n {
            let s = sim(&vectors[i], &vectors[j])?;
            matrix[i][j] = s;
            matrix[j][i] = s;
        }
    }

    Ok(matrix)
}
