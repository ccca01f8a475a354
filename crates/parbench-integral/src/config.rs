use derive_builder::Builder;
use foundation::{BenchError, Result};

#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct IntegralConfig {
    /// Lower bound of the domain.
    pub a: f64,
    /// Upper bound of the domain.
    pub b: f64,
    /// Convergence tolerance between successive estimates.
    pub epsilon: f64,
    pub initial_subdivisions: usize,
    /// Subdivisions added after every non-converged estimate.
    pub step: usize,
    /// Refinement cap; exceeding it reports non-convergence.
    pub max_refinements: usize,
    pub threads: usize,
    /// Timings averaged at the converged subdivision count, the converging
    /// run included.
    pub timing_runs: usize,
}

impl Default for IntegralConfig {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 1000.0,
            epsilon: 1e-7,
            initial_subdivisions: 1000,
            step: 100,
            max_refinements: 10_000,
            threads: 6,
            timing_runs: 5,
        }
    }
}

impl IntegralConfig {
    pub fn builder() -> IntegralConfigBuilder {
        IntegralConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.a.is_finite() || !self.b.is_finite() {
            return Err(BenchError::config(format!(
                "domain bounds must be finite, got [{}, {}]",
                self.a, self.b
            )));
        }
        if self.a >= self.b {
            return Err(BenchError::config(format!(
                "domain must be non-empty, got [{}, {}]",
                self.a, self.b
            )));
        }
        if self.epsilon.is_nan() || self.epsilon <= 0.0 {
            return Err(BenchError::config(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.initial_subdivisions < 2 {
            return Err(BenchError::config("initial_subdivisions must be at least 2"));
        }
        let fields = [
            ("step", self.step),
            ("max_refinements", self.max_refinements),
            ("threads", self.threads),
            ("timing_runs", self.timing_runs),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(BenchError::config(format!("{name} must be positive")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let cfg = IntegralConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!((cfg.a, cfg.b), (1.0, 1000.0));
    }

    #[test]
    fn test_invalid_fields() {
        let cases = [
            IntegralConfig::builder().epsilon(0.0).build().unwrap(),
            IntegralConfig::builder().epsilon(f64::NAN).build().unwrap(),
            IntegralConfig::builder().b(f64::INFINITY).build().unwrap(),
            IntegralConfig::builder().a(5.0).b(5.0).build().unwrap(),
            IntegralConfig::builder().a(10.0).b(1.0).build().unwrap(),
            IntegralConfig::builder().initial_subdivisions(1).build().unwrap(),
            IntegralConfig::builder().step(0).build().unwrap(),
            IntegralConfig::builder().timing_runs(0).build().unwrap(),
        ];
        for cfg in cases {
            assert!(
                matches!(cfg.validate(), Err(BenchError::InvalidConfig(_))),
                "{cfg:?}"
            );
        }
    }
}
