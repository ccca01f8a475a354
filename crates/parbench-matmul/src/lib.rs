//! Dense integer matrix multiplication, serial and parallel.
//!
//! Matrices are stored row-major. The result is computed row by row, so row
//! ranges can be handed to different workers independently: either as one
//! contiguous block per worker, or in fixed-size chunks dealt out by the
//! rayon runtime.

pub mod bench;
pub mod config;
pub mod matrix;
pub mod strategy;

pub use bench::{compare, size_sweep, thread_sweep, time_strategy};
pub use config::{MatmulConfig, MatmulConfigBuilder};
pub use matrix::Matrix;
pub use strategy::{multiply, Strategy};
