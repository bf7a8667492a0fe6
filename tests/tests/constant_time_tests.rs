// tests/constant_time_tests.rs
// Entry point for the timing tests under tests/constant_time/.
// They are machine sensitive and ignored by default:
//     cargo test -p sparrow-tests --test constant_time_tests -- --ignored --nocapture

mod constant_time;
