//! Sparse hypervectors stored as index/value pairs

use crate::error::{HdcError, Result};
use crate::kind::SparseDomain;
use rand::Rng;
use std::collections::BTreeMap;

/// A sparse hypervector
///
/// Only non-zero positions are stored. `density` describes the process the
/// vector was generated with; it is not re-checked after bind or bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseHdv {
    pub(crate) len: usize,
    pub(crate) density: f64,
    pub(crate) domain: SparseDomain,
    pub(crate) entries: BTreeMap<usize, f64>,
}

impl SparseHdv {
    /// Density used when none is given
    pub const DEFAULT_DENSITY: f64 = 0.01;

    /// Random vector using the thread-local RNG
    pub fn random(len: usize, domain: SparseDomain, density: f64) -> Result<Self> {
        Self::random_with_rng(len, domain, density, &mut rand::thread_rng())
    }

    /// Each position is independently set to 1 with probability `density`
    pub fn random_with_rng<R: Rng + ?Sized>(
        len: usize,
        domain: SparseDomain,
        density: f64,
        rng: &mut R,
    ) -> Result<Self> {
        validate_density(density)?;
        let entries = (0..len)
            .filter(|_| rng.gen_bool(density))
            .map(|i| (i, 1.0))
            .collect();
        Ok(Self {
            len,
            density,
            domain,
            entries,
        })
    }

    /// Builds a boolean sparse vector from its set positions
    pub fn from_indices(len: usize, indices: &[usize]) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for &i in indices {
            check_index(i, len)?;
            entries.insert(i, 1.0);
        }
        Ok(Self::from_parts(len, SparseDomain::Boolean, entries))
    }

    /// Builds a numeric sparse vector from `(index, value)` pairs; zeros are dropped
    pub fn from_pairs(len: usize, pairs: &[(usize, f64)]) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for &(i, v) in pairs {
            check_index(i, len)?;
            if v != 0.0 {
                entries.insert(i, v);
            }
        }
        Ok(Self::from_parts(len, SparseDomain::Numeric, entries))
    }

    pub(crate) fn from_parts(
        len: usize,
        domain: SparseDomain,
        entries: BTreeMap<usize, f64>,
    ) -> Self {
        let density = if len == 0 {
            0.0
        } else {
            entries.len() as f64 / len as f64
        };
        Self {
            len,
            density,
            domain,
            entries,
        }
    }

    /// Dimension N
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when N is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element domain
    #[inline]
    pub fn domain(&self) -> SparseDomain {
        self.domain
    }

    /// Density parameter p
    #[inline]
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Number of stored (non-zero) entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Element at `index`; absent positions read as `0.0`
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        Some(self.entries.get(&index).copied().unwrap_or(0.0))
    }

    /// Stored entries in index order
    pub fn entries(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|(&i, &v)| (i, v))
    }

    /// Sum of the elements (the set count for the boolean domain)
    pub fn sum(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries.values().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Dense copy of the elements
    pub fn to_dense(&self) -> Vec<f64> {
        let mut out = vec![0.0; self.len];
        for (&i, &v) in &self.entries {
            out[i] = v;
        }
        out
    }
}

pub(crate) fn validate_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(HdcError::invalid(format!(
            "density {} outside [0, 1]",
            density
        )))
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(HdcError::invalid(format!(
            "index {} out of bounds for length {}",
            index, len
        )));
    }
    Ok(())
}
