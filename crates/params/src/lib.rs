//! Constant values for the sparrow library
//!
//! Every table-coupled constant (ring degree, modulus, vector dimensions and
//! wire sizes) is fixed here at compile time. Changing any of them requires
//! regenerating the twiddle, cutoff and Gaussian tables in `sparrow-algorithms`.

#![no_std]

pub mod pqc;
