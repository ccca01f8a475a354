use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Args, ValueEnum};
use foundation::record::read_records;
use foundation::{read_counts, ComparisonRecord};
use matmul::Strategy;
use serde::Serialize;

/// Pair benchmark output with its inputs and derive per-strategy times
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Matrix sizes the size sweep ran over
    #[arg(long, default_value = "size_data.txt")]
    pub sizes: PathBuf,

    /// Thread counts the thread sweep ran over
    #[arg(long, default_value = "number_threads.txt")]
    pub threads: PathBuf,

    #[arg(long, default_value = "time_size.txt")]
    pub size_times: PathBuf,

    #[arg(long, default_value = "time_threads.txt")]
    pub thread_times: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct Series {
    axis: &'static str,
    strategies: Vec<&'static str>,
    rows: Vec<Row>,
}

#[derive(Debug, Serialize)]
struct Row {
    x: usize,
    serial_secs: f64,
    parallel_secs: Vec<f64>,
    speedups: Vec<f64>,
}

fn build_series(
    axis: &'static str,
    xs: &[usize],
    records: &[ComparisonRecord],
) -> Result<Series> {
    ensure!(
        xs.len() == records.len(),
        "{axis}: {} input value(s) but {} record(s)",
        xs.len(),
        records.len()
    );

    // Only the labels are needed, the chunk width is irrelevant here.
    let strategies: Vec<&'static str> = Strategy::parallel(1).iter().map(Strategy::label).collect();
    let rows = xs
        .iter()
        .zip(records)
        .map(|(&x, rec)| -> Result<Row> {
            ensure!(
                rec.speedups.len() == strategies.len(),
                "{axis} {x}: expected {} speedups, got {}",
                strategies.len(),
                rec.speedups.len()
            );
            Ok(Row {
                x,
                serial_secs: rec.baseline_secs,
                parallel_secs: rec.parallel_secs(),
                speedups: rec.speedups.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Series {
        axis,
        strategies,
        rows,
    })
}

fn render_text(series: &Series) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>10} {:>12}", series.axis, "serial"));
    for s in &series.strategies {
        out.push_str(&format!(" {:>20}", s));
    }
    out.push('\n');

    for row in &series.rows {
        out.push_str(&format!("{:>10} {:>12.6}", row.x, row.serial_secs));
        for (secs, speedup) in row.parallel_secs.iter().zip(&row.speedups) {
            out.push_str(&format!(" {:>10.6} ({:>5.2}x)", secs, speedup));
        }
        out.push('\n');
    }
    out
}

pub fn run(args: ReportArgs) -> Result<()> {
    let sizes = read_counts(&args.sizes)?;
    let threads = read_counts(&args.threads)?;
    let size_records = read_records(&args.size_times)
        .with_context(|| format!("reading {}", args.size_times.display()))?;
    let thread_records = read_records(&args.thread_times)
        .with_context(|| format!("reading {}", args.thread_times.display()))?;

    let series = [
        build_series("size", &sizes, &size_records)?,
        build_series("threads", &threads, &thread_records)?,
    ];
    log::debug!(
        "{} size row(s), {} thread row(s)",
        series[0].rows.len(),
        series[1].rows.len()
    );

    match args.format {
        Format::Text => {
            for s in &series {
                println!("{}", render_text(s));
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&series)?),
    }
    Ok(())
}
