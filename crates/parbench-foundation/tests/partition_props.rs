//! Property tests for the block partition and the counts-file reader.

use std::io::Write;

use foundation::{block_ranges, effective_threads, read_counts, BenchError};
use proptest::prelude::*;

proptest! {
    /// Ranges are contiguous, ascending and cover `0..total` exactly.
    #[test]
    fn block_ranges_cover_index_space(total in 1usize..5_000, threads in 1usize..64) {
        let ranges = block_ranges(total, threads).unwrap();
        prop_assert_eq!(ranges.len(), threads.min(total));

        let mut next = 0;
        for r in &ranges {
            prop_assert_eq!(r.start, next);
            prop_assert!(r.end > r.start, "empty range {:?}", r);
            next = r.end;
        }
        prop_assert_eq!(next, total);
    }

    /// Every worker but the last gets exactly `total / T` items.
    #[test]
    fn only_last_range_absorbs_remainder(total in 1usize..5_000, threads in 1usize..64) {
        let ranges = block_ranges(total, threads).unwrap();
        let t = effective_threads(total, threads).unwrap();
        let per = total / t;
        for r in &ranges[..ranges.len() - 1] {
            prop_assert_eq!(r.len(), per);
        }
        prop_assert_eq!(ranges[ranges.len() - 1].len(), per + total % t);
    }
}

#[test]
fn counts_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "100\n500\n1000").unwrap();
    assert_eq!(read_counts(file.path()).unwrap(), vec![100, 500, 1000]);
}

#[test]
fn missing_counts_file_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_counts(dir.path().join("size_data.txt")).unwrap_err();
    assert!(matches!(err, BenchError::InvalidInput { .. }), "{err}");
}
