// tests/src/suites/mod.rs

pub mod constant_time;
pub mod kat;
