//! Bit-packed binary and bipolar hypervectors

use crate::error::{HdcError, Result};
use bitvec::prelude::*;
use rand::Rng;
use std::fmt;

/// Packed bit storage shared by the binary and bipolar variants
pub type Bits = BitVec<u64, Lsb0>;

/// Fills `len` bits with independent fair coins, one `u64` draw per word
pub(crate) fn random_bits<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Bits {
    let words = len.div_ceil(64);
    let raw: Vec<u64> = (0..words).map(|_| rng.gen()).collect();
    let mut bits = Bits::from_vec(raw);
    bits.truncate(len);
    bits
}

/// Number of positions where `a` and `b` differ
#[inline]
pub(crate) fn mismatches(a: &Bits, b: &Bits) -> usize {
    (a.clone() ^ b.clone()).count_ones()
}

/// A {0,1} hypervector packed into 64-bit words
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::BinaryHdv;
///
/// let v = BinaryHdv::random(10_000);
/// assert_eq!(v.len(), 10_000);
/// // ~50% of bits set
/// assert!(v.popcount() > 4_500 && v.popcount() < 5_500);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BinaryHdv {
    pub(crate) bits: Bits,
}

impl BinaryHdv {
    /// All-zero vector of length `len`
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 0; len],
        }
    }

    /// All-one vector of length `len`
    pub fn ones(len: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 1; len],
        }
    }

    /// Random vector using the thread-local RNG
    pub fn random(len: usize) -> Self {
        Self::random_with_rng(len, &mut rand::thread_rng())
    }

    /// Random vector, one fair coin per bit
    pub fn random_with_rng<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self {
            bits: random_bits(len, rng),
        }
    }

    /// Wraps existing bit storage
    pub fn from_bits(mut bits: Bits) -> Self {
        bits.force_align();
        Self { bits }
    }

    /// Builds a vector from booleans
    pub fn from_bools(values: &[bool]) -> Self {
        Self {
            bits: values.iter().copied().collect(),
        }
    }

    /// Dimension N
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when N is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Element at `index`, or `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Number of set bits
    #[inline]
    pub fn popcount(&self) -> usize {
        self.bits.count_ones()
    }

    /// Sum of the {0,1} embedding, i.e. the popcount
    #[inline]
    pub fn sum(&self) -> usize {
        self.popcount()
    }

    /// Euclidean norm of the {0,1} embedding
    #[inline]
    pub fn norm(&self) -> f64 {
        (self.popcount() as f64).sqrt()
    }

    /// Number of differing bits
    pub fn hamming_distance(&self, other: &Self) -> Result<usize> {
        check_len(self.len(), other.len())?;
        Ok(mismatches(&self.bits, &other.bits))
    }

    /// Bitwise NOT
    pub fn complement(&self) -> Self {
        Self {
            bits: !self.bits.clone(),
        }
    }

    /// Underlying packed bits
    #[inline]
    pub fn bits(&self) -> &BitSlice<u64, Lsb0> {
        &self.bits
    }

    /// Iterator over the elements
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }
}

impl fmt::Debug for BinaryHdv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinaryHdv {{ bits: {} set / {} total }}",
            self.popcount(),
            self.len()
        )
    }
}

/// A {-1,+1} hypervector packed into 64-bit words
///
/// A set bit reads as `+1` and a clear bit as `-1`, so the sum is
/// `2·popcount − N` and elementwise multiplication is XNOR of the bits.
#[derive(Clone, PartialEq, Eq)]
pub struct BipolarHdv {
    pub(crate) bits: Bits,
}

impl BipolarHdv {
    /// Vector of all `+1`
    pub fn ones(len: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 1; len],
        }
    }

    /// Random vector using the thread-local RNG
    pub fn random(len: usize) -> Self {
        Self::random_with_rng(len, &mut rand::thread_rng())
    }

    /// Random vector, one fair coin per element
    pub fn random_with_rng<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self {
            bits: random_bits(len, rng),
        }
    }

    /// Wraps existing bit storage (set bit = `+1`)
    pub fn from_bits(mut bits: Bits) -> Self {
        bits.force_align();
        Self { bits }
    }

    /// Builds a vector from signs; zero and positive map to `+1`
    pub fn from_signs(values: &[i8]) -> Self {
        Self {
            bits: values.iter().map(|&v| v >= 0).collect(),
        }
    }

    /// Dimension N
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when N is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Element at `index` as `-1` or `+1`
    #[inline]
    pub fn get(&self, index: usize) -> Option<i8> {
        self.bits
            .get(index)
            .map(|bit| if *bit { 1 } else { -1 })
    }

    /// Number of `+1` elements
    #[inline]
    pub fn popcount(&self) -> usize {
        self.bits.count_ones()
    }

    /// `2·popcount − N`
    #[inline]
    pub fn sum(&self) -> i64 {
        2 * self.popcount() as i64 - self.len() as i64
    }

    /// Euclidean norm, always `sqrt(N)`
    #[inline]
    pub fn norm(&self) -> f64 {
        (self.len() as f64).sqrt()
    }

    /// Number of positions with opposite sign
    pub fn hamming_distance(&self, other: &Self) -> Result<usize> {
        check_len(self.len(), other.len())?;
        Ok(mismatches(&self.bits, &other.bits))
    }

    /// Elementwise negation
    pub fn negate(&self) -> Self {
        Self {
            bits: !self.bits.clone(),
        }
    }

    /// Underlying packed bits
    #[inline]
    pub fn bits(&self) -> &BitSlice<u64, Lsb0> {
        &self.bits
    }

    /// Iterator over the elements as `-1`/`+1`
    pub fn iter(&self) -> impl Iterator<Item = i8> + '_ {
        self.bits.iter().by_vals().map(|b| if b { 1 } else { -1 })
    }
}

impl fmt::Debug for BipolarHdv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BipolarHdv {{ len: {}, sum: {} }}", self.len(), self.sum())
    }
}

#[inline]
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(HdcError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_and_ones() {
        let zero = BinaryHdv::zeros(100);
        assert_eq!(zero.popcount(), 0);
        assert_eq!(zero.norm(), 0.0);

        let ones = BinaryHdv::ones(100);
        assert_eq!(ones.sum(), 100);
        assert_eq!(ones.norm(), 10.0);
    }

    #[test]
    fn test_random_length_not_multiple_of_word() {
        let v = BinaryHdv::random(10_000);
        assert_eq!(v.len(), 10_000);
        assert_eq!(v.bits().len(), 10_000);
        assert!(v.popcount() < 10_000);
        assert!(v.get(9_999).is_some());
        assert!(v.get(10_000).is_none());
    }

    #[test]
    fn test_seeded_random_is_deterministic() {
        let a = BinaryHdv::random_with_rng(1_000, &mut StdRng::seed_from_u64(42));
        let b = BinaryHdv::random_with_rng(1_000, &mut StdRng::seed_from_u64(42));
        let c = BinaryHdv::random_with_rng(1_000, &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_bools() {
        let v = BinaryHdv::from_bools(&[true, false, true]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(0), Some(true));
        assert_eq!(v.get(1), Some(false));
        assert_eq!(v.sum(), 2);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![true, false, true]);
    }

    #[test]
    fn test_complement() {
        let v = BinaryHdv::random(500);
        let c = v.complement();
        assert_eq!(v.popcount() + c.popcount(), 500);
        assert_eq!(v.hamming_distance(&c).unwrap(), 500);
        assert_eq!(c.complement(), v);
    }

    #[test]
    fn test_bipolar_readout() {
        let v = BipolarHdv::random(2_000);
        assert!(v.iter().all(|x| x == 1 || x == -1));
        let manual: i64 = v.iter().map(i64::from).sum();
        assert_eq!(v.sum(), manual);
    }

    #[test]
    fn test_bipolar_from_signs() {
        let v = BipolarHdv::from_signs(&[1, -1, -1, 1, 1]);
        assert_eq!(v.get(0), Some(1));
        assert_eq!(v.get(1), Some(-1));
        assert_eq!(v.sum(), 1);
        assert_eq!(v.norm(), (5.0f64).sqrt());
        assert_eq!(v.negate().sum(), -1);
    }

    #[test]
    fn test_hamming_length_mismatch() {
        let a = BinaryHdv::zeros(10);
        let b = BinaryHdv::zeros(11);
        assert!(matches!(
            a.hamming_distance(&b),
            Err(HdcError::DimensionMismatch {
                expected: 10,
                actual: 11
            })
        ));
    }

    #[test]
    fn test_debug_format() {
        let v = BinaryHdv::zeros(64);
        assert!(format!("{:?}", v).contains("bits: 0 set / 64 total"));
    }
}
