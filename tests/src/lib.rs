//! Test support for the sparrow library: known-answer vectors, a
//! deterministic RNG and the timing harness used by the integration tests.

pub mod suites;
