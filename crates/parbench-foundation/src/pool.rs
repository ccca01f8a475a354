use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;

/// Build a fresh pool of exactly `threads` workers for one parallel region.
///
/// Pools are never shared between calls: every strategy invocation forks
/// and joins its own team.
pub fn fork_join_pool(threads: usize) -> Result<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("parbench-worker-{i}"))
        .build()?;
    Ok(pool)
}

/// Logical processors visible to this process, 1 if unknown.
pub fn logical_processors() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_has_requested_width() {
        let pool = fork_join_pool(3).unwrap();
        assert_eq!(pool.current_num_threads(), 3);
        assert_eq!(pool.install(rayon::current_num_threads), 3);
    }

    #[test]
    fn test_logical_processors_positive() {
        assert!(logical_processors() >= 1);
    }
}
