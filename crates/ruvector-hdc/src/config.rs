//! Configuration for vector generation and bundling

use crate::error::{HdcError, Result};
use crate::DEFAULT_DIMENSION;
use std::fmt;
use std::str::FromStr;

/// How binary majority bundling resolves an exact tie
///
/// Ties only occur when an even number of vectors is bundled.
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::EvenResolve;
///
/// let policy: EvenResolve = "positive".parse().unwrap();
/// assert_eq!(policy, EvenResolve::Positive);
/// assert!("sideways".parse::<EvenResolve>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvenResolve {
    /// Fresh fair coin per tied position
    #[default]
    Random,
    /// Ties become 1 (or +1)
    Positive,
    /// Ties become 0 (or -1)
    Negative,
}

impl EvenResolve {
    /// Policy name as accepted by [`FromStr`]
    pub const fn as_str(self) -> &'static str {
        match self {
            EvenResolve::Random => "random",
            EvenResolve::Positive => "positive",
            EvenResolve::Negative => "negative",
        }
    }
}

impl FromStr for EvenResolve {
    type Err = HdcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "random" => Ok(EvenResolve::Random),
            "positive" => Ok(EvenResolve::Positive),
            "negative" => Ok(EvenResolve::Negative),
            other => Err(HdcError::invalid(format!(
                "unknown tie-break policy '{}', expected random, positive or negative",
                other
            ))),
        }
    }
}

impl fmt::Display for EvenResolve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`crate::HdvFactory`]
#[derive(Debug, Clone, PartialEq)]
pub struct HdcConfig {
    /// Dimension N of generated vectors
    pub dimension: usize,

    /// Tie policy for binary and bipolar bundling
    pub even_resolve: EvenResolve,

    /// Seed for reproducible generation; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for HdcConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            even_resolve: EvenResolve::Random,
            seed: None,
        }
    }
}

impl HdcConfig {
    /// Configuration for a specific dimension
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Default::default()
        }
    }

    /// Set the tie policy
    pub fn with_even_resolve(mut self, even_resolve: EvenResolve) -> Self {
        self.even_resolve = even_resolve;
        self
    }

    /// Set the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects a zero dimension
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(HdcError::invalid("dimension must be positive"));
        }
        Ok(())
    }
}
