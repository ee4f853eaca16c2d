//! Dense real and integer hypervectors with a multiplicity counter

use super::binary::check_len;
use crate::error::Result;
use rand::Rng;
use rand_distr::StandardNormal;

/// A dense real-valued hypervector
///
/// `multiplicity` counts how many vectors have been bundled into this one;
/// a freshly generated or bound vector has multiplicity 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RealHdv {
    pub(crate) data: Vec<f64>,
    pub(crate) multiplicity: usize,
}

impl RealHdv {
    /// Random vector with standard-normal elements, thread-local RNG
    pub fn random(len: usize) -> Self {
        Self::random_with_rng(len, &mut rand::thread_rng())
    }

    /// Random vector with standard-normal elements
    pub fn random_with_rng<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let data = (0..len).map(|_| rng.sample(StandardNormal)).collect();
        Self {
            data,
            multiplicity: 1,
        }
    }

    /// Wraps existing values with multiplicity 1
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            data,
            multiplicity: 1,
        }
    }

    pub(crate) fn with_multiplicity(data: Vec<f64>, multiplicity: usize) -> Self {
        Self { data, multiplicity }
    }

    /// Dimension N
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when N is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Number of vectors folded into this one
    #[inline]
    pub fn multiplicity(&self) -> usize {
        self.multiplicity
    }

    /// Sum of the elements
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Element slice
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Folds `other` into `self` as a running mean weighted by multiplicity
    ///
    /// The direction of the result matches the plain sum of all vectors
    /// folded so far, so cosine similarity agrees with a batch bundle.
    pub fn accumulate(&mut self, other: &RealHdv) -> Result<()> {
        check_len(self.len(), other.len())?;
        let n = self.multiplicity as f64;
        let m = other.multiplicity as f64;
        let total = n + m;
        for (x, &y) in self.data.iter_mut().zip(&other.data) {
            *x = (*x * n + y * m) / total;
        }
        self.multiplicity += other.multiplicity;
        Ok(())
    }
}

/// A dense integer hypervector
///
/// Generated vectors hold independent ±1 values; bundles hold raw sums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntHdv {
    pub(crate) data: Vec<i64>,
    pub(crate) multiplicity: usize,
}

impl IntHdv {
    /// Random ±1 vector, thread-local RNG
    pub fn random(len: usize) -> Self {
        Self::random_with_rng(len, &mut rand::thread_rng())
    }

    /// Random ±1 vector
    pub fn random_with_rng<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let data = (0..len)
            .map(|_| if rng.gen::<bool>() { 1 } else { -1 })
            .collect();
        Self {
            data,
            multiplicity: 1,
        }
    }

    /// Wraps existing values with multiplicity 1
    pub fn from_vec(data: Vec<i64>) -> Self {
        Self {
            data,
            multiplicity: 1,
        }
    }

    pub(crate) fn with_multiplicity(data: Vec<i64>, multiplicity: usize) -> Self {
        Self { data, multiplicity }
    }

    /// Dimension N
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when N is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.data.get(index).copied()
    }

    /// Number of vectors folded into this one
    #[inline]
    pub fn multiplicity(&self) -> usize {
        self.multiplicity
    }

    /// Sum of the elements
    pub fn sum(&self) -> i64 {
        self.data.iter().sum()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.data
            .iter()
            .map(|&x| (x as f64) * (x as f64))
            .sum::<f64>()
            .sqrt()
    }

    /// Element slice
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Adds `other` into `self`; multiplicities add
    pub fn accumulate(&mut self, other: &IntHdv) -> Result<()> {
        check_len(self.len(), other.len())?;
        for (x, &y) in self.data.iter_mut().zip(&other.data) {
            *x += y;
        }
        self.multiplicity += other.multiplicity;
        Ok(())
    }
}
