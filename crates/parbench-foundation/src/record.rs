//! Comparison records: one CSV-like line per benchmarked configuration,
//! `baseline_secs,speedup_1,speedup_2,...`, no header.

use core::fmt;
use core::str::FromStr;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRecord {
    /// Mean serial time in seconds.
    pub baseline_secs: f64,
    /// `baseline / parallel` per compared strategy, in column order.
    pub speedups: Vec<f64>,
}

impl ComparisonRecord {
    /// Absolute time of every compared strategy, derived from its speedup.
    pub fn parallel_secs(&self) -> Vec<f64> {
        self.speedups
            .iter()
            .map(|s| self.baseline_secs / s)
            .collect()
    }
}

impl fmt::Display for ComparisonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.baseline_secs)?;
        for s in &self.speedups {
            write!(f, ",{s}")?;
        }
        Ok(())
    }
}

impl FromStr for ComparisonRecord {
    type Err = String;

    fn from_str(line: &str) -> core::result::Result<Self, Self::Err> {
        let mut fields = line
            .trim()
            .split(',')
            .filter(|f| !f.is_empty())
            .map(|f| {
                f.trim()
                    .parse::<f64>()
                    .map_err(|_| format!("`{f}` is not a number"))
            });
        let baseline_secs = fields.next().ok_or("empty record")??;
        let speedups = fields.collect::<core::result::Result<Vec<_>, _>>()?;
        Ok(ComparisonRecord {
            baseline_secs,
            speedups,
        })
    }
}

/// Line-oriented writer for comparison records.
pub struct RecordWriter<W: Write> {
    inner: W,
    path: PathBuf,
}

impl RecordWriter<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
        }
    }

    pub fn write(&mut self, record: &ComparisonRecord) -> Result<()> {
        writeln!(self.inner, "{record}").map_err(|e| BenchError::io(&self.path, e))
    }

    pub fn finish(mut self) -> Result<W> {
        self.inner
            .flush()
            .map_err(|e| BenchError::io(&self.path, e))?;
        Ok(self.inner)
    }
}

/// Read back every record of a file written by [`RecordWriter`].
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<ComparisonRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.parse().map_err(|reason| BenchError::InvalidInput {
                origin: path.display().to_string(),
                reason: format!("line {}: {reason}", idx + 1),
            })
        })
        .collect()
}
