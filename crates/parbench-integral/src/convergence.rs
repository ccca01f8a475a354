//! Subdivision refinement until successive estimates agree.
//!
//! Starting at `initial_subdivisions`, each step computes a fresh estimate
//! and compares it to the previous one (0 before the first step, so the
//! first step never converges). While the difference exceeds `epsilon`,
//! `step` subdivisions are added and the estimate is recomputed. Once
//! converged, the estimate is timed again at the final subdivision count
//! and the timings are averaged.

use foundation::{BenchError, Result};

use crate::accumulate::{integrate, Accumulation, IntegrationResult};
use crate::config::IntegralConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Refining,
    Converged,
}

#[derive(Debug, Clone, Copy)]
pub struct Convergence {
    /// Final estimate; `elapsed` is the mean over `timing_runs` runs.
    pub result: IntegrationResult,
    /// Estimates computed before convergence, the converging one included.
    pub refinements: usize,
}

pub struct Refiner<'a, F> {
    accumulation: Accumulation,
    f: &'a F,
    cfg: &'a IntegralConfig,
    n: usize,
    previous: f64,
    diff: f64,
    refinements: usize,
    phase: Phase,
    last: Option<IntegrationResult>,
}

impl<'a, F> Refiner<'a, F>
where
    F: Fn(f64) -> f64 + Sync,
{
    pub fn new(accumulation: Accumulation, f: &'a F, cfg: &'a IntegralConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            accumulation,
            f,
            cfg,
            n: cfg.initial_subdivisions,
            previous: 0.0,
            diff: f64::INFINITY,
            refinements: 0,
            phase: Phase::Refining,
            last: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Subdivision count of the next (or, once converged, the final)
    /// estimate.
    pub fn subdivisions(&self) -> usize {
        self.n
    }

    pub fn last(&self) -> Option<&IntegrationResult> {
        self.last.as_ref()
    }

    /// Compute one estimate and advance the state machine.
    pub fn step(&mut self) -> Result<Phase> {
        if self.phase == Phase::Converged {
            return Ok(Phase::Converged);
        }
        if self.refinements >= self.cfg.max_refinements {
            return Err(self.not_converged());
        }

        let estimate = self.estimate()?;
        self.diff = (estimate.value - self.previous).abs();
        self.previous = estimate.value;
        self.refinements += 1;
        self.last = Some(estimate);
        log::trace!(
            "{}: n = {}, value = {}, diff = {:e}",
            self.accumulation,
            self.n,
            estimate.value,
            self.diff
        );

        if self.diff <= self.cfg.epsilon {
            self.phase = Phase::Converged;
        } else {
            self.n += self.cfg.step;
        }
        Ok(self.phase)
    }

    /// Re-time the converged estimate and average all timing runs.
    pub fn finish(self) -> Result<Convergence> {
        let mut result = match (self.phase, self.last) {
            (Phase::Converged, Some(last)) => last,
            _ => return Err(self.not_converged()),
        };

        let mut total = result.elapsed;
        for _ in 1..self.cfg.timing_runs {
            total += self.estimate()?.elapsed;
        }
        result.elapsed = total.div_f64(self.cfg.timing_runs as f64);

        log::debug!(
            "{} converged after {} refinements: n = {}, value = {}",
            self.accumulation,
            self.refinements,
            result.n,
            result.value
        );
        Ok(Convergence {
            result,
            refinements: self.refinements,
        })
    }

    fn estimate(&self) -> Result<IntegrationResult> {
        integrate(
            self.accumulation,
            self.f,
            self.cfg.a,
            self.cfg.b,
            self.n,
            self.cfg.threads,
        )
    }

    fn not_converged(&self) -> BenchError {
        BenchError::NotConverged {
            refinements: self.refinements,
            n: self.n,
            diff: self.diff,
        }
    }
}

/// Refine until converged (or the refinement cap is hit), then average the
/// timings at the final subdivision count.
pub fn converge<F>(accumulation: Accumulation, f: &F, cfg: &IntegralConfig) -> Result<Convergence>
where
    F: Fn(f64) -> f64 + Sync,
{
    let mut refiner = Refiner::new(accumulation, f, cfg)?;
    while refiner.step()? == Phase::Refining {}
    refiner.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrand::arctan_kernel;

    fn pi_cfg() -> IntegralConfig {
        IntegralConfig::builder()
            .a(0.0)
            .b(1.0)
            .epsilon(1e-9)
            .initial_subdivisions(100)
            .step(100)
            .threads(3)
            .timing_runs(2)
            .build()
            .unwrap()
    }

    #[test]
    fn test_first_step_never_converges() {
        let cfg = pi_cfg();
        let mut r = Refiner::new(Accumulation::Serial, &arctan_kernel, &cfg).unwrap();
        assert_eq!(r.step().unwrap(), Phase::Refining);
        assert_eq!(r.subdivisions(), 200);
        assert_eq!(r.last().map(|l| l.n), Some(100));
    }

    #[test]
    fn test_converges_near_pi() {
        let out = converge(Accumulation::Critical, &arctan_kernel, &pi_cfg()).unwrap();
        assert!((out.result.value - core::f64::consts::PI).abs() < 1e-6);
        assert!(out.refinements >= 2);
        assert_eq!(out.result.n, 100 + (out.refinements - 1) * 100);
    }

    #[test]
    fn test_stepping_after_convergence_is_noop() {
        let cfg = pi_cfg();
        let mut r = Refiner::new(Accumulation::Lock, &arctan_kernel, &cfg).unwrap();
        while r.step().unwrap() == Phase::Refining {}
        let n = r.subdivisions();
        assert_eq!(r.step().unwrap(), Phase::Converged);
        assert_eq!(r.subdivisions(), n);
    }

    #[test]
    fn test_refinement_cap_reports_failure() {
        let cfg = IntegralConfig::builder()
            .a(0.0)
            .b(1.0)
            .epsilon(1e-30)
            .initial_subdivisions(10)
            .step(10)
            .max_refinements(5)
            .threads(2)
            .build()
            .unwrap();
        match converge(Accumulation::Atomic, &arctan_kernel, &cfg) {
            Err(BenchError::NotConverged { refinements, n, .. }) => {
                assert_eq!(refinements, 5);
                assert_eq!(n, 60);
            }
            other => panic!("expected non-convergence, got {other:?}"),
        }
    }

    #[test]
    fn test_finish_before_convergence_fails() {
        let cfg = pi_cfg();
        let r = Refiner::new(Accumulation::Serial, &arctan_kernel, &cfg).unwrap();
        assert!(matches!(r.finish(), Err(BenchError::NotConverged { .. })));
    }
}
