//! Internal utilities for the sparrow library
//!
//! Constant-time helpers and byte-order conversions shared by the
//! arithmetic and KEM crates. Not part of the stable public API.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
