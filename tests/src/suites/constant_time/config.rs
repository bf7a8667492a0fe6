// tests/src/suites/constant_time/config.rs

/// Thresholds and sample sizes of one timing comparison
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub mean_ratio_min: f64,
    pub mean_ratio_max: f64,
    pub std_dev_threshold: f64,         // diagnostics only
    pub t_stat_threshold: f64,
    pub combined_score_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            mean_ratio_min: 0.80,
            mean_ratio_max: 1.25,
            std_dev_threshold: 0.20,
            t_stat_threshold: 1.7,
            combined_score_threshold: 1.8,
            num_warmup: 100,
            num_samples: 25,
            num_iterations: 100,
        }
    }
}

// Builder methods
impl TestConfig {
    pub fn with_mean_ratio_range(mut self, min: f64, max: f64) -> Self {
        self.mean_ratio_min = min;
        self.mean_ratio_max = max;
        self
    }

    pub fn with_std_dev_threshold(mut self, threshold: f64) -> Self {
        self.std_dev_threshold = threshold;
        self
    }

    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

// Presets per operation
impl TestConfig {
    /// Full decapsulation: two ring products and several SHAKE256 calls
    pub fn for_decapsulation() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.30)
            .with_warmup(20)
            .with_samples_and_iterations(30, 20)
            .with_t_stat_threshold(2.0)
            .with_combined_score_threshold(2.0)
    }

    /// Reconciliation of a single coefficient vector
    pub fn for_reconciliation() -> Self {
        Self::default()
            .with_warmup(1000)
            .with_samples_and_iterations(25, 1000)
            .with_t_stat_threshold(1.9)
            .with_combined_score_threshold(1.9)
    }

    /// Gaussian sampling over RNG output that hits short and long table prefixes
    pub fn for_sampler() -> Self {
        Self::default()
            .with_mean_ratio_range(0.80, 1.30)
            .with_samples_and_iterations(25, 200)
            .with_t_stat_threshold(2.0)
            .with_combined_score_threshold(2.0)
    }

    /// Tag comparison alone
    pub fn for_compare() -> Self {
        Self::default()
            .with_warmup(1000)
            .with_samples_and_iterations(25, 5000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let c = TestConfig::default()
            .with_samples_and_iterations(3, 4)
            .with_t_stat_threshold(9.0);
        assert_eq!(c.num_samples, 3);
        assert_eq!(c.num_iterations, 4);
        assert_eq!(c.t_stat_threshold, 9.0);
        assert_eq!(c.combined_score_threshold, 1.8);
    }
}
