// tests/constant_time/mod.rs

pub mod kem_tests;
pub mod primitive_tests;

use sparrow_tests::suites::constant_time::{generate_test_insights, TestConfig, TimingAnalysis};

/// Prints the analysis and fails the test when the classes differ
pub fn report(name: &str, analysis: &TimingAnalysis, config: &TestConfig) {
    println!("{} Timing Analysis:", name);
    println!("  Mean times: {:.2} ns vs {:.2} ns", analysis.mean_a, analysis.mean_b);
    println!("  Mean ratio: {:.3}", analysis.mean_ratio);
    println!(
        "  t-statistic: {:.3} (df {:.1}), p-value: {:.4}",
        analysis.t_statistic, analysis.degrees_of_freedom, analysis.p_value
    );
    println!(
        "  Effect size (Cohen's d): {:.3} - {}",
        analysis.cohens_d, analysis.effect_size_interpretation
    );
    println!(
        "  95% CI for mean difference: ({:.2}, {:.2}) ns",
        analysis.confidence_interval.0, analysis.confidence_interval.1
    );
    println!("  Combined score: {:.3}", analysis.combined_score);
    println!("\n{}", generate_test_insights(analysis, config, name));

    assert!(
        analysis.is_constant_time,
        "{} is not constant-time: combined_score={:.3} (threshold: {:.3})",
        name,
        analysis.combined_score,
        config.combined_score_threshold
    );
}
