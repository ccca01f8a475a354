//! Times each multiplication strategy once on a single pair of operands.

use anyhow::Result;
use clap::Parser;
use foundation::logical_processors;
use matmul::{time_strategy, MatmulConfig, Matrix, Strategy};
use rng::OperandSource;

#[derive(Parser)]
#[command(name = "matmul-smoke", version, about = "Time every multiplication strategy once")]
struct Cli {
    /// Square matrix size
    #[arg(long, default_value_t = 1000)]
    size: usize,

    #[arg(long, default_value_t = 6)]
    threads: usize,

    #[arg(long, default_value_t = 6)]
    kernels: usize,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    println!("Number of logical processors: {}\n", logical_processors());

    let cfg = MatmulConfig::builder()
        .threads(cli.threads)
        .fixed_size(cli.size)
        .kernels(cli.kernels)
        .repeats(1)
        .build()?;
    cfg.validate()?;

    let (a, b) = OperandSource::from_seed_opt(cli.seed).operands(cli.size, cli.size);
    let a = Matrix::from_vec(cli.size, cli.size, a)?;
    let b = Matrix::from_vec(cli.size, cli.size, b)?;
    let mut c = Matrix::zeros(cli.size, cli.size)?;

    let secs = time_strategy(Strategy::Serial, &a, &b, &mut c, 1, cfg.repeats)?;
    println!("{}: {secs}", Strategy::Serial.label());
    for strategy in Strategy::parallel(cfg.kernels) {
        let secs = time_strategy(strategy, &a, &b, &mut c, cfg.threads, cfg.repeats)?;
        println!("{}: {secs}", strategy.label());
    }
    Ok(())
}
