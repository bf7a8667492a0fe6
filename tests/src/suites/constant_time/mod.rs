// tests/src/suites/constant_time/mod.rs
//! Statistical timing comparison of two input classes

pub mod config;
pub mod tester;

pub use config::TestConfig;
pub use tester::{generate_test_insights, TimingAnalysis, TimingTester};
