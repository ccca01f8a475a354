pub mod error;
pub mod input;
pub mod partition;
pub mod pool;
pub mod record;
pub mod timing;

pub use error::{BenchError, Result};
pub use input::{parse_counts, read_counts};
pub use partition::{block_ranges, effective_threads, ChunkSize};
pub use pool::{fork_join_pool, logical_processors};
pub use record::{ComparisonRecord, RecordWriter};
pub use timing::{mean_secs, speedup, timed};
