//! Trapezoidal integration benchmark.
//!
//! Integrates `sin^2(1/x) / x^2` over `[1, 1000]` with every accumulation
//! scheme, refining until successive estimates agree within epsilon, and
//! prints the converged value, subdivision count and mean time of each.

use anyhow::{Context, Result};
use clap::Parser;
use foundation::logical_processors;
use integral::{converge, oscillating, Accumulation, IntegralConfig};

#[derive(Parser)]
#[command(
    name = "trapezoid-integral",
    version,
    about = "Compare accumulation schemes on a trapezoidal integral"
)]
struct Cli {
    #[arg(long, default_value_t = 6)]
    threads: usize,

    /// Tolerance between successive estimates
    #[arg(long, default_value_t = 1e-7)]
    epsilon: f64,

    /// Give up after this many refinements
    #[arg(long, default_value_t = 10_000)]
    max_refinements: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    println!("Number of logical processors: {}\n", logical_processors());

    let cfg = IntegralConfig::builder()
        .threads(cli.threads)
        .epsilon(cli.epsilon)
        .max_refinements(cli.max_refinements)
        .build()?;
    cfg.validate()?;
    log::info!(
        "integrating over [{}, {}], epsilon = {:e}, {} threads",
        cfg.a,
        cfg.b,
        cfg.epsilon,
        cfg.threads
    );

    for acc in Accumulation::ALL {
        let out = converge(acc, &oscillating, &cfg)
            .with_context(|| format!("{acc} integration failed"))?;
        println!("Accumulation: {acc}");
        println!("Integral value: {}", out.result.value);
        println!("Number of subdivisions: {}", out.result.n);
        println!("Refinements: {}", out.refinements);
        println!("Time: {}\n", out.result.elapsed.as_secs_f64());
    }
    Ok(())
}
