//! Graded (fuzzy truth value) hypervectors

use crate::error::{HdcError, Result};
use crate::fuzzy::{bipolar_to_graded, graded_to_bipolar};
use rand::distributions::Uniform;
use rand::Rng;

/// A hypervector of fuzzy truth values in [0,1]
///
/// `lower`/`upper` record the range the elements were generated in.
/// Vectors produced by bind or bundle carry the full [0,1] range.
#[derive(Debug, Clone, PartialEq)]
pub struct GradedHdv {
    pub(crate) data: Vec<f64>,
    pub(crate) lower: f64,
    pub(crate) upper: f64,
}

impl GradedHdv {
    /// Full graded domain
    pub const DEFAULT_BOUNDS: (f64, f64) = (0.0, 1.0);

    /// Checks `0 ≤ lower < upper ≤ 1`
    pub fn validate_bounds(lower: f64, upper: f64) -> Result<()> {
        if 0.0 <= lower && lower < upper && upper <= 1.0 {
            Ok(())
        } else {
            Err(HdcError::InvalidRange {
                lower,
                upper,
                domain: "GradedHDV",
            })
        }
    }

    /// Uniform sample over [lower, upper], thread-local RNG
    pub fn random(len: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::random_with_rng(len, lower, upper, &mut rand::thread_rng())
    }

    /// Uniform sample over [lower, upper]
    pub fn random_with_rng<R: Rng + ?Sized>(
        len: usize,
        lower: f64,
        upper: f64,
        rng: &mut R,
    ) -> Result<Self> {
        Self::validate_bounds(lower, upper)?;
        let dist = Uniform::new_inclusive(lower, upper);
        let data = (0..len).map(|_| rng.sample(dist)).collect();
        Ok(Self { data, lower, upper })
    }

    /// Wraps existing values; every value must lie in [0,1]
    pub fn from_vec(data: Vec<f64>) -> Result<Self> {
        if let Some(&bad) = data.iter().find(|x| !(0.0..=1.0).contains(*x)) {
            return Err(HdcError::invalid(format!(
                "graded value {} outside [0, 1]",
                bad
            )));
        }
        Ok(Self::unbounded(data))
    }

    pub(crate) fn unbounded(data: Vec<f64>) -> Self {
        let (lower, upper) = Self::DEFAULT_BOUNDS;
        Self { data, lower, upper }
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

    /// Generation bounds `(lower, upper)`
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
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
}

/// A hypervector of bipolar fuzzy values in [-1,1]
///
/// Elements are stored on [0,1] and remapped with `2x − 1` on read.
#[derive(Debug, Clone, PartialEq)]
pub struct GradedBipolarHdv {
    pub(crate) stored: Vec<f64>,
    pub(crate) lower: f64,
    pub(crate) upper: f64,
}

impl GradedBipolarHdv {
    /// Full bipolar domain
    pub const DEFAULT_BOUNDS: (f64, f64) = (-1.0, 1.0);

    /// Checks `-1 ≤ lower < 0 < upper ≤ 1`
    pub fn validate_bounds(lower: f64, upper: f64) -> Result<()> {
        if -1.0 <= lower && lower < 0.0 && 0.0 < upper && upper <= 1.0 {
            Ok(())
        } else {
            Err(HdcError::InvalidRange {
                lower,
                upper,
                domain: "GradedBipolarHDV",
            })
        }
    }

    /// Uniform sample over [lower, upper], thread-local RNG
    pub fn random(len: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::random_with_rng(len, lower, upper, &mut rand::thread_rng())
    }

    /// Uniform sample over [lower, upper] on the bipolar scale
    pub fn random_with_rng<R: Rng + ?Sized>(
        len: usize,
        lower: f64,
        upper: f64,
        rng: &mut R,
    ) -> Result<Self> {
        Self::validate_bounds(lower, upper)?;
        let dist = Uniform::new_inclusive(lower, upper);
        let stored = (0..len)
            .map(|_| bipolar_to_graded(rng.sample(dist)))
            .collect();
        Ok(Self {
            stored,
            lower,
            upper,
        })
    }

    /// Wraps bipolar values; every value must lie in [-1,1]
    pub fn from_bipolar(values: &[f64]) -> Result<Self> {
        if let Some(&bad) = values.iter().find(|x| !(-1.0..=1.0).contains(*x)) {
            return Err(HdcError::invalid(format!(
                "bipolar graded value {} outside [-1, 1]",
                bad
            )));
        }
        Ok(Self::from_stored(
            values.iter().map(|&x| bipolar_to_graded(x)).collect(),
        ))
    }

    pub(crate) fn from_stored(stored: Vec<f64>) -> Self {
        let (lower, upper) = Self::DEFAULT_BOUNDS;
        Self {
            stored,
            lower,
            upper,
        }
    }

    /// Dimension N
    #[inline]
    pub fn len(&self) -> usize {
        self.stored.len()
    }

    /// True when N is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stored.is_empty()
    }

    /// Element at `index` on the bipolar scale
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.stored.get(index).map(|&x| graded_to_bipolar(x))
    }

    /// Generation bounds `(lower, upper)` on the bipolar scale
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Read-out values on the bipolar scale
    pub fn values(&self) -> Vec<f64> {
        self.stored.iter().map(|&x| graded_to_bipolar(x)).collect()
    }

    /// Internal [0,1] representation
    #[inline]
    pub fn stored(&self) -> &[f64] {
        &self.stored
    }

    /// Sum of the read-out values
    pub fn sum(&self) -> f64 {
        self.stored.iter().map(|&x| graded_to_bipolar(x)).sum()
    }

    /// Euclidean norm of the read-out values
    pub fn norm(&self) -> f64 {
        self.stored
            .iter()
            .map(|&x| graded_to_bipolar(x).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}
