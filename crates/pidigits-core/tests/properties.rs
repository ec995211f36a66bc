//! Property-based tests for partitioning, assembly, and progress counting.
//!
//! These tests drive the core pipeline directly (partition → workers →
//! aggregate) without the orchestration layer.

use proptest::prelude::*;

use pidigits_core::aggregator::aggregate;
use pidigits_core::bbp::hex_digits;
use pidigits_core::partition::{partition, spawn_workers};
use pidigits_core::progress::ProgressCounter;
use pidigits_core::range::DigitRange;

fn run_pipeline(range: DigitRange, workers: usize) -> (Vec<u8>, u64) {
    let counter = ProgressCounter::new(range.count);
    let handles = spawn_workers(range, workers, &counter).unwrap();
    let digits = aggregate(handles, range).unwrap();
    (digits, counter.get())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Sub-range counts sum to the request and differ by at most one.
    #[test]
    fn partition_is_balanced(start in 0u64..1_000_000, count in 0u64..100_000, n in 1usize..64) {
        let parts = partition(DigitRange::new(start, count), n).unwrap();
        prop_assert_eq!(parts.len(), n);
        prop_assert_eq!(parts.iter().map(|p| p.count).sum::<u64>(), count);

        let max = parts.iter().map(|p| p.count).max().unwrap();
        let min = parts.iter().map(|p| p.count).min().unwrap();
        prop_assert!(max - min <= 1);

        // Larger sub-ranges come first
        for pair in parts.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
            prop_assert_eq!(pair[0].end(), pair[1].start);
        }
        prop_assert_eq!(parts[0].start, start);
        prop_assert_eq!(parts[n - 1].end(), start + count);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Splitting across workers does not change the digits.
    #[test]
    fn partitioning_is_output_invariant(start in 0u64..2_000, count in 0u64..48, n in 1usize..12) {
        let range = DigitRange::new(start, count);
        let (single, _) = run_pipeline(range, 1);
        let (split, _) = run_pipeline(range, n);
        prop_assert_eq!(&single, &split);
        prop_assert_eq!(single, hex_digits(start, usize::try_from(count).unwrap()));
    }

    /// The shared counter ends exactly at the requested count.
    #[test]
    fn counter_is_exact(start in 0u64..500, count in 0u64..96, n in 1usize..=16) {
        let (digits, computed) = run_pipeline(DigitRange::new(start, count), n);
        prop_assert_eq!(digits.len() as u64, count);
        prop_assert_eq!(computed, count);
    }
}

#[test]
fn counter_is_exact_for_sixteen_workers() {
    let (digits, computed) = run_pipeline(DigitRange::new(0, 160), 16);
    assert_eq!(digits.len(), 160);
    assert_eq!(computed, 160);
}
