// tests/src/suites/constant_time/tester.rs
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

use super::config::TestConfig;

/// Summary statistics of one timing class
#[derive(Debug, Clone, Copy)]
struct Sample {
    mean: f64,
    var: f64,
    n: f64,
}

impl Sample {
    fn of(times: &[u128]) -> Self {
        let n = times.len() as f64;
        let mean = times.iter().map(|&t| t as f64).sum::<f64>() / n;
        let ss: f64 = times.iter().map(|&t| (t as f64 - mean).powi(2)).sum();
        Self { mean, var: ss / (n - 1.0), n }
    }

    fn std_dev(&self) -> f64 {
        self.var.sqrt()
    }

    fn se2(&self) -> f64 {
        self.var / self.n
    }
}

/// Result of comparing the timings of two input classes
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
    pub cohens_d: f64,
    pub effect_size_interpretation: String,
    pub confidence_interval: (f64, f64),
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            times.push(start.elapsed().as_nanos() / self.num_iterations as u128);
        }
        times
    }

    /// Measures `a` and `b` in alternating samples so drift hits both classes
    pub fn measure_pair<A, B>(&self, mut a: A, mut b: B) -> (Vec<u128>, Vec<u128>)
    where
        A: FnMut(),
        B: FnMut(),
    {
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        let one = TimingTester::new(1, self.num_iterations);
        for _ in 0..self.num_samples {
            times_a.extend(one.measure(&mut a));
            times_b.extend(one.measure(&mut b));
        }
        (times_a, times_b)
    }

    /// Drops values outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times
            .iter()
            .filter(|&&t| (t as f64) >= lo && (t as f64) <= hi)
            .copied()
            .collect()
    }

    // Welch's t
    fn t_statistic(a: &Sample, b: &Sample) -> f64 {
        (a.mean - b.mean).abs() / (a.se2() + b.se2()).sqrt()
    }

    // Welch-Satterthwaite
    fn degrees_of_freedom(a: &Sample, b: &Sample) -> f64 {
        (a.se2() + b.se2()).powi(2)
            / (a.se2().powi(2) / (a.n - 1.0) + b.se2().powi(2) / (b.n - 1.0))
    }

    /// Two-tailed p-value of `t_stat` under Student's t with `df` degrees of freedom
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if !(df >= 1.0 && df.is_finite()) {
            return if t_stat.abs() < 2.0 { 0.1 } else { 0.01 };
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.05,
        }
    }

    fn t_critical(df: f64, confidence: f64) -> f64 {
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => dist.inverse_cdf(1.0 - (1.0 - confidence) / 2.0),
            Err(_) => 1.96,
        }
    }

    fn cohens_d(a: &Sample, b: &Sample) -> f64 {
        let pooled = ((a.var * (a.n - 1.0) + b.var * (b.n - 1.0)) / (a.n + b.n - 2.0)).sqrt();
        (a.mean - b.mean).abs() / pooled
    }

    pub fn interpret_effect_size(d: f64) -> String {
        match d {
            d if d < 0.2 => "Negligible effect",
            d if d < 0.5 => "Small effect",
            d if d < 0.8 => "Medium effect",
            d if d < 1.2 => "Large effect",
            _ => "Very large effect",
        }
        .to_string()
    }

    /// Weighted score of mean ratio, t-statistic and relative spread; 1.0 is ideal
    pub fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev: f64) -> f64 {
        let score = 1.0 + 0.5 * (mean_ratio - 1.0) + 0.2 * (t_stat / 10.0) + 0.3 * rel_std_dev;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    pub fn analyze_constant_time(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("not enough samples left after outlier removal".to_string());
        }

        let a = Sample::of(&clean_a);
        let b = Sample::of(&clean_b);

        let mean_ratio = a.mean.max(b.mean) / a.mean.min(b.mean);
        let t_statistic = Self::t_statistic(&a, &b);
        let df = Self::degrees_of_freedom(&a, &b);
        let p_value = Self::p_value(t_statistic, df);
        let rel_std_dev = f64::max(a.std_dev() / a.mean, b.std_dev() / b.mean);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, rel_std_dev);

        let cohens_d = Self::cohens_d(&a, &b);
        let margin = Self::t_critical(df, 0.95) * (a.se2() + b.se2()).sqrt();
        let diff = (a.mean - b.mean).abs();

        Ok(TimingAnalysis {
            mean_a: a.mean,
            mean_b: b.mean,
            std_dev_a: a.std_dev(),
            std_dev_b: b.std_dev(),
            mean_ratio,
            t_statistic,
            degrees_of_freedom: df,
            p_value,
            combined_score,
            is_constant_time: combined_score <= config.combined_score_threshold
                && mean_ratio <= config.mean_ratio_max,
            cohens_d,
            effect_size_interpretation: Self::interpret_effect_size(cohens_d),
            confidence_interval: ((diff - margin).max(0.0), diff + margin),
        })
    }
}

/// Human-readable report of one analysis
pub fn generate_test_insights(
    analysis: &TimingAnalysis,
    config: &TestConfig,
    name: &str,
) -> String {
    let mut out = String::new();
    let diff_pct = (analysis.mean_a - analysis.mean_b).abs()
        / f64::min(analysis.mean_a, analysis.mean_b)
        * 100.0;

    if analysis.is_constant_time {
        out.push_str(&format!("PASS: {} shows no timing difference.\n", name));
        return out;
    }

    out.push_str(&format!("FAIL: {} timing differs between classes.\n", name));
    out.push_str(&format!(
        "  mean {:.0} ns vs {:.0} ns ({:.1}%), t = {:.2}, p = {:.2e}, d = {:.2}\n",
        analysis.mean_a,
        analysis.mean_b,
        diff_pct,
        analysis.t_statistic,
        analysis.p_value,
        analysis.cohens_d
    ));
    out.push_str(&format!(
        "  score {:.3} > {:.3}\n",
        analysis.combined_score, config.combined_score_threshold
    ));

    if analysis.mean_ratio > 1.5 && analysis.p_value < 0.001 {
        out.push_str("  pattern: large consistent gap, look for a branch or early return\n");
    } else if analysis.cohens_d > 0.8 && analysis.cohens_d < 1.5 {
        out.push_str("  pattern: small consistent gap, look for secret-indexed memory access\n");
    } else {
        out.push_str("  pattern: noisy, rerun on an idle machine before investigating\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_classes_pass() {
        let a: Vec<u128> = (0..30).map(|i| 1000 + (i % 5)).collect();
        let b: Vec<u128> = (0..30).map(|i| 1000 + ((i + 2) % 5)).collect();
        let tester = TimingTester::new(30, 1);
        let r = tester.analyze_constant_time(&a, &b, &TestConfig::default()).unwrap();
        assert!(r.t_statistic < 1.0);
        assert!(r.is_constant_time);
    }

    #[test]
    fn separated_classes_fail() {
        let a: Vec<u128> = (0..30).map(|i| 1000 + (i % 5)).collect();
        let b: Vec<u128> = (0..30).map(|i| 2000 + (i % 5)).collect();
        let tester = TimingTester::new(30, 1);
        let r = tester.analyze_constant_time(&a, &b, &TestConfig::default()).unwrap();
        assert!(r.mean_ratio > 1.9);
        assert!(r.p_value < 0.001);
        assert!(!r.is_constant_time);
        assert!(generate_test_insights(&r, &TestConfig::default(), "x").starts_with("FAIL"));
    }

    #[test]
    fn outliers_are_dropped() {
        let mut v: Vec<u128> = vec![10; 20];
        v.push(10_000);
        assert_eq!(TimingTester::remove_outliers(&v).len(), 20);
    }
}
