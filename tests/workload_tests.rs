//! Workload correctness: no lost updates single-threaded, exact reader sums.

use false_sharing::{read_y, write_x, SameLine, SharedPair, SplitLines};
use proptest::prelude::*;

fn write_then_check<L: SharedPair>(initial: i32, iterations: u64) {
    let mut layout = L::with_values(initial, 1);
    write_x(&mut layout.split().0, iterations);
    assert_eq!(layout.x(), initial.wrapping_add(iterations as i32));
    assert_eq!(layout.y(), 1);
}

fn read_and_sum<L: SharedPair>(value: i32, iterations: u64) -> i64 {
    let mut layout = L::with_values(0, value);
    let (_, reader) = layout.split();
    read_y(reader, iterations)
}

#[test]
fn test_writer_runs_exact_count() {
    write_then_check::<SameLine>(0, 1_000_000);
    write_then_check::<SplitLines>(0, 1_000_000);
}

#[test]
fn test_reader_default_layout() {
    let mut layout = SameLine::default();
    let (_, reader) = layout.split();
    assert_eq!(read_y(reader, 1_000), 1_000);
}

#[test]
fn test_writer_and_reader_on_separate_threads() {
    let mut layout = SameLine::default();
    let (mut writer, reader) = layout.split();
    let sum = std::thread::scope(|s| {
        s.spawn(|| write_x(&mut writer, 100_000));
        s.spawn(move || read_y(reader, 100_000)).join().unwrap()
    });
    assert_eq!(sum, 100_000);
    assert_eq!(layout.x(), 100_000);
}

proptest! {
    #[test]
    fn prop_writer_adds_iterations(initial in -1_000_000i32..1_000_000, k in 0u64..10_000) {
        write_then_check::<SameLine>(initial, k);
        write_then_check::<SplitLines>(initial, k);
    }

    #[test]
    fn prop_reader_returns_value_times_k(value in any::<i32>(), k in 0u64..10_000) {
        let expected = value as i64 * k as i64;
        prop_assert_eq!(read_and_sum::<SameLine>(value, k), expected);
        prop_assert_eq!(read_and_sum::<SplitLines>(value, k), expected);
    }
}
