//! Named random constructors
//!
//! The free functions draw from `rand::thread_rng()`. [`HdvFactory`] owns
//! its own generator and a fixed dimension, so it can be seeded for
//! reproducible runs and handed to one worker each.

use crate::bundle::bundle_with;
use crate::config::HdcConfig;
use crate::error::Result;
use crate::kind::SparseDomain;
use crate::vector::{
    BinaryHdv, BipolarHdv, GradedBipolarHdv, GradedHdv, HyperVector, IntHdv, RealHdv, SparseHdv,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Dense random ±1 integer vector
pub fn hdv(n: usize) -> HyperVector {
    IntHdv::random(n).into()
}

/// Dense random ±1 integer vector from `rng`
pub fn hdv_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> HyperVector {
    IntHdv::random_with_rng(n, rng).into()
}

/// Random binary vector
pub fn binhdv(n: usize) -> HyperVector {
    BinaryHdv::random(n).into()
}

/// Random binary vector from `rng`
pub fn binhdv_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> HyperVector {
    BinaryHdv::random_with_rng(n, rng).into()
}

/// Random bit-packed bipolar vector
pub fn bphdv(n: usize) -> HyperVector {
    BipolarHdv::random(n).into()
}

/// Random bit-packed bipolar vector from `rng`
pub fn bphdv_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> HyperVector {
    BipolarHdv::random_with_rng(n, rng).into()
}

/// Random sparse vector with density `p`
///
/// # Errors
///
/// `InvalidArgument` when `p` lies outside [0,1].
pub fn sphdv(n: usize, domain: SparseDomain, p: f64) -> Result<HyperVector> {
    Ok(SparseHdv::random(n, domain, p)?.into())
}

/// Random sparse vector with density `p` from `rng`
pub fn sphdv_with_rng<R: Rng + ?Sized>(
    n: usize,
    domain: SparseDomain,
    p: f64,
    rng: &mut R,
) -> Result<HyperVector> {
    Ok(SparseHdv::random_with_rng(n, domain, p, rng)?.into())
}

/// Standard-normal real vector
pub fn realhdv(n: usize) -> HyperVector {
    RealHdv::random(n).into()
}

/// Standard-normal real vector from `rng`
pub fn realhdv_with_rng<R: Rng + ?Sized>(n: usize, rng: &mut R) -> HyperVector {
    RealHdv::random_with_rng(n, rng).into()
}

/// Uniform graded vector on `[l, u]`
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::{gradhdv, HdcError};
///
/// let v = gradhdv(1_000, 0.2, 0.8).unwrap();
/// assert_eq!(v.len(), 1_000);
/// assert!(matches!(gradhdv(1_000, 0.3, 0.3), Err(HdcError::InvalidRange { .. })));
/// ```
pub fn gradhdv(n: usize, l: f64, u: f64) -> Result<HyperVector> {
    Ok(GradedHdv::random(n, l, u)?.into())
}

/// Uniform graded vector on `[l, u]` from `rng`
pub fn gradhdv_with_rng<R: Rng + ?Sized>(
    n: usize,
    l: f64,
    u: f64,
    rng: &mut R,
) -> Result<HyperVector> {
    Ok(GradedHdv::random_with_rng(n, l, u, rng)?.into())
}

/// Uniform graded-bipolar vector on `[l, u]`
pub fn gradbphdv(n: usize, l: f64, u: f64) -> Result<HyperVector> {
    Ok(GradedBipolarHdv::random(n, l, u)?.into())
}

/// Uniform graded-bipolar vector on `[l, u]` from `rng`
pub fn gradbphdv_with_rng<R: Rng + ?Sized>(
    n: usize,
    l: f64,
    u: f64,
    rng: &mut R,
) -> Result<HyperVector> {
    Ok(GradedBipolarHdv::random_with_rng(n, l, u, rng)?.into())
}

/// Vector generator bound to one configuration
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::{EvenResolve, HdcConfig, HdvFactory};
///
/// let config = HdcConfig::new(2_048)
///     .with_even_resolve(EvenResolve::Positive)
///     .with_seed(42);
/// let mut a = HdvFactory::new(config.clone()).unwrap();
/// let mut b = HdvFactory::new(config).unwrap();
///
/// // same seed, same vectors
/// assert_eq!(a.binhdv(), b.binhdv());
/// assert_eq!(a.binhdv().len(), 2_048);
/// ```
#[derive(Debug, Clone)]
pub struct HdvFactory {
    config: HdcConfig,
    rng: StdRng,
}

impl HdvFactory {
    /// Validates `config` and seeds the generator
    pub fn new(config: HdcConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(
            dimension = config.dimension,
            even_resolve = %config.even_resolve,
            seeded = config.seed.is_some(),
            "created hypervector factory"
        );
        Ok(Self { config, rng })
    }

    /// Active configuration
    pub fn config(&self) -> &HdcConfig {
        &self.config
    }

    /// Configured dimension N
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Dense ±1 integer vector
    pub fn hdv(&mut self) -> HyperVector {
        hdv_with_rng(self.config.dimension, &mut self.rng)
    }

    /// Binary vector
    pub fn binhdv(&mut self) -> HyperVector {
        binhdv_with_rng(self.config.dimension, &mut self.rng)
    }

    /// Bit-packed bipolar vector
    pub fn bphdv(&mut self) -> HyperVector {
        bphdv_with_rng(self.config.dimension, &mut self.rng)
    }

    /// Sparse vector with density `p`
    pub fn sphdv(&mut self, domain: SparseDomain, p: f64) -> Result<HyperVector> {
        sphdv_with_rng(self.config.dimension, domain, p, &mut self.rng)
    }

    /// Real vector
    pub fn realhdv(&mut self) -> HyperVector {
        realhdv_with_rng(self.config.dimension, &mut self.rng)
    }

    /// Graded vector on `[l, u]`
    pub fn gradhdv(&mut self, l: f64, u: f64) -> Result<HyperVector> {
        gradhdv_with_rng(self.config.dimension, l, u, &mut self.rng)
    }

    /// Graded-bipolar vector on `[l, u]`
    pub fn gradbphdv(&mut self, l: f64, u: f64) -> Result<HyperVector> {
        gradbphdv_with_rng(self.config.dimension, l, u, &mut self.rng)
    }

    /// Bundles with the configured tie policy, drawing ties from this generator
    pub fn bundle(&mut self, vectors: &[HyperVector]) -> Result<HyperVector> {
        bundle_with(vectors, self.config.even_resolve, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvenResolve;
    use crate::error::HdcError;
    use crate::kind::{ElementKind, VectorKind};

    #[test]
    fn test_constructor_variants() {
        assert_eq!(hdv(100).kind(), VectorKind::Int);
        assert_eq!(binhdv(100).kind(), VectorKind::Binary);
        assert_eq!(bphdv(100).kind(), VectorKind::Bipolar);
        assert_eq!(
            sphdv(100, SparseDomain::Boolean, 0.1).unwrap().kind(),
            VectorKind::Sparse(SparseDomain::Boolean)
        );
        assert_eq!(realhdv(100).kind(), VectorKind::Real);
        assert_eq!(gradhdv(100, 0.0, 1.0).unwrap().kind(), VectorKind::Graded);
        assert_eq!(
            gradbphdv(100, -1.0, 1.0).unwrap().element_kind(),
            ElementKind::Graded
        );
    }

    #[test]
    fn test_hdv_is_plus_minus_one() {
        let v = hdv(1_000);
        assert_eq!(v.len(), 1_000);
        assert!(v.to_dense().iter().all(|&x| x == 1.0 || x == -1.0));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            gradhdv(10, 0.3, 0.3),
            Err(HdcError::InvalidRange { .. })
        ));
        assert!(matches!(
            gradbphdv(10, 0.1, 0.9),
            Err(HdcError::InvalidRange { .. })
        ));
        assert!(matches!(
            sphdv(10, SparseDomain::Numeric, 1.5),
            Err(HdcError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_factory_rejects_zero_dimension() {
        assert!(matches!(
            HdvFactory::new(HdcConfig::new(0)),
            Err(HdcError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_seeded_factory_is_reproducible() {
        let config = HdcConfig::new(500).with_seed(7);
        let mut a = HdvFactory::new(config.clone()).unwrap();
        let mut b = HdvFactory::new(config).unwrap();

        assert_eq!(a.realhdv(), b.realhdv());
        assert_eq!(a.gradhdv(0.1, 0.9).unwrap(), b.gradhdv(0.1, 0.9).unwrap());
        assert_eq!(
            a.sphdv(SparseDomain::Boolean, 0.05).unwrap(),
            b.sphdv(SparseDomain::Boolean, 0.05).unwrap()
        );

        let vs: Vec<HyperVector> = (0..4).map(|_| a.bphdv()).collect();
        let ws: Vec<HyperVector> = (0..4).map(|_| b.bphdv()).collect();
        assert_eq!(a.bundle(&vs).unwrap(), b.bundle(&ws).unwrap());
    }

    #[test]
    fn test_factory_uses_configured_policy() {
        let config = HdcConfig::new(256).with_even_resolve(EvenResolve::Negative);
        let mut factory = HdvFactory::new(config).unwrap();
        assert_eq!(factory.dimension(), 256);

        let v = match factory.binhdv() {
            HyperVector::Binary(b) => b,
            _ => unreachable!(),
        };
        let pair = [HyperVector::from(v.clone()), HyperVector::from(v.complement())];
        assert_eq!(
            factory.bundle(&pair).unwrap(),
            HyperVector::from(BinaryHdv::zeros(256))
        );
    }
}
