use derive_builder::Builder;
use foundation::{BenchError, Result};

use crate::matrix::element_count;

#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct MatmulConfig {
    /// Worker count for the size sweep.
    pub threads: usize,
    /// Square matrix size for the thread sweep.
    pub fixed_size: usize,
    /// Timed runs averaged per strategy.
    pub repeats: usize,
    /// Physical core count, sets the per-kernel chunk size.
    pub kernels: usize,
}

impl Default for MatmulConfig {
    fn default() -> Self {
        Self {
            threads: 6,
            fixed_size: 1000,
            repeats: 3,
            kernels: 6,
        }
    }
}

impl MatmulConfig {
    pub fn builder() -> MatmulConfigBuilder {
        MatmulConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("threads", self.threads),
            ("fixed_size", self.fixed_size),
            ("repeats", self.repeats),
            ("kernels", self.kernels),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(BenchError::config(format!("{name} must be positive")));
            }
        }
        element_count(self.fixed_size, self.fixed_size)?;
        Ok(())
    }
}
