//! Ring arithmetic and sampling primitives for the Sparrow scheme
//!
//! This crate provides the building blocks the KEM is assembled from:
//! Montgomery arithmetic modulo Q, the negacyclic NTT over
//! Z_Q[x]/(x^128 + 1), uniform and discrete-Gaussian samplers, bit packing,
//! and the SHAKE256 extendable-output function they are all driven by.
//!
//! # Security Features
//!
//! - Every reduction and correction is a masked arithmetic step with no
//!   data-dependent branch
//! - Gaussian sampling scans its whole table for every sample
//! - Ring elements and XOF state are zeroized on drop

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Polynomial ring and samplers
pub mod poly;
pub use poly::polynomial::{MontPoly, NttPoly, NttProduct, Poly};

// XOF implementations
pub mod xof;
pub use xof::{shake256, ExtendableOutputFunction, Shake256};
