//! Trapezoidal-rule integration with interchangeable accumulation schemes.
//!
//! Worker-based schemes split the interior samples `1..n` into contiguous
//! blocks, sum each block locally and merge the partial sums into one shared
//! accumulator. They differ only in how that merge is synchronised.

pub mod accumulate;
pub mod atomic;
pub mod config;
pub mod convergence;
pub mod integrand;

pub use accumulate::{integrate, Accumulation, IntegrationResult};
pub use config::{IntegralConfig, IntegralConfigBuilder};
pub use convergence::{converge, Convergence, Phase, Refiner};
pub use integrand::{arctan_kernel, oscillating};
