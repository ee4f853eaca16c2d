//! # RuVector HDC
//!
//! Hyperdimensional computing over a closed family of vector variants:
//! - Binary and bit-packed bipolar vectors
//! - Sparse vectors with boolean or numeric elements
//! - Dense real and integer vectors
//! - Graded (fuzzy) vectors on [0,1] and graded-bipolar vectors on [-1,1]
//!
//! Every variant supports the same algebra. The variant's element kind
//! picks the formula:
//!
//! | Element kind | Variants                          | bind          | bundle             | similarity |
//! |--------------|-----------------------------------|---------------|--------------------|------------|
//! | Binary       | Binary, Sparse{Bool}              | XOR           | majority with ties | Tanimoto   |
//! | Numeric      | Bipolar, Sparse{Real}, Real, Int  | elementwise × | sum                | cosine     |
//! | Graded       | Graded, GradedBipolar             | fuzzy XOR     | three-pi fold      | cosine     |
//!
//! Packed bipolar vectors compute the numeric formulas on their bits:
//! the product is XNOR, the bundled sum keeps its sign, and cosine is
//! `(2m − N) / N` over `m` agreeing bits.
//!
//! ## Example
//!
//! ```rust
//! use ruvector_hdc::{bind, bphdv, bundle, shift, sim, unbind};
//!
//! let n = 10_000;
//! let (color, shape) = (bphdv(n), bphdv(n));
//! let (red, round) = (bphdv(n), bphdv(n));
//!
//! // {color: red, shape: round}
//! let record = bundle(&[
//!     bind(&color, &red).unwrap(),
//!     bind(&shape, &round).unwrap(),
//! ])
//! .unwrap();
//!
//! // querying a role gives back something close to its filler
//! let guess = unbind(&record, &color).unwrap();
//! assert!(sim(&guess, &red).unwrap() > sim(&guess, &round).unwrap());
//!
//! // shifting decorrelates
//! assert!(sim(&red, &shift(&red, 1)).unwrap().abs() < 0.1);
//! ```

#![warn(missing_docs)]

pub mod bind;
pub mod bundle;
pub mod config;
pub mod error;
pub mod factory;
pub mod fuzzy;
pub mod kind;
pub mod memory;
pub mod permute;
pub mod similarity;
pub mod vector;

pub use bind::{bind, bind_all, unbind};
pub use bundle::{bundle, bundle_with};
pub use config::{EvenResolve, HdcConfig};
pub use error::{HdcError, Result};
pub use factory::{
    binhdv, binhdv_with_rng, bphdv, bphdv_with_rng, gradbphdv, gradbphdv_with_rng, gradhdv,
    gradhdv_with_rng, hdv, hdv_with_rng, realhdv, realhdv_with_rng, sphdv, sphdv_with_rng,
    HdvFactory,
};
pub use kind::{ElementKind, SparseDomain, VectorKind};
pub use memory::ItemMemory;
pub use permute::{shift, shift_in_place};
pub use similarity::{
    batch_similarities, cosine, hamming, hamming_distance, hamming_similarity,
    pairwise_similarities, similarity_to, sim, tanimoto, top_k_similar,
};
pub use vector::{
    BinaryHdv, BipolarHdv, Bits, GradedBipolarHdv, GradedHdv, HyperVector, IntHdv, RealHdv,
    SparseHdv,
};

/// Default dimension N of generated vectors
pub const DEFAULT_DIMENSION: usize = 10_000;
