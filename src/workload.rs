//! Writer and reader loops run by the worker threads.

use std::ptr;

use crate::layout::{ReadLane, WriteLane};

/// Increment `x` `iterations` times, one volatile read-modify-write each.
#[inline(never)]
pub fn write_x(lane: &mut WriteLane<'_>, iterations: u64) {
    for _ in 0..iterations {
        lane.increment();
    }
}

/// Read `y` `iterations` times and return the running sum.
///
/// The sum lives in a local that is itself accessed volatilely, so the loop
/// cannot be folded into a single multiplication or dropped as dead code.
#[inline(never)]
pub fn read_y(lane: ReadLane<'_>, iterations: u64) -> i64 {
    let mut sum: i64 = 0;
    let sum_ptr: *mut i64 = &mut sum;
    for _ in 0..iterations {
        let value = lane.load() as i64;
        // SAFETY: `sum_ptr` points at a live local owned by this frame
        unsafe {
            let current = ptr::read_volatile(sum_ptr);
            ptr::write_volatile(sum_ptr, current.wrapping_add(value));
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{SameLine, SharedPair, SplitLines};

    #[test]
    fn test_write_x_counts_every_iteration() {
        let mut layout = SameLine::default();
        write_x(&mut layout.split().0, 1_000);
        assert_eq!(layout.x(), 1_000);
        assert_eq!(layout.y(), 1);
    }

    #[test]
    fn test_read_y_sums_every_iteration() {
        let mut layout = SplitLines::with_values(0, 3);
        let (_, reader) = layout.split();
        assert_eq!(read_y(reader, 1_000), 3_000);
        assert_eq!(layout.x(), 0);
    }

    #[test]
    fn test_zero_iterations() {
        let mut layout = SameLine::with_values(4, 9);
        let (mut writer, reader) = layout.split();
        write_x(&mut writer, 0);
        assert_eq!(read_y(reader, 0), 0);
        assert_eq!(layout.x(), 4);
    }

    #[test]
    fn test_read_y_does_not_overflow_i32() {
        let mut layout = SameLine::with_values(0, i32::MAX);
        let (_, reader) = layout.split();
        assert_eq!(read_y(reader, 4), 4 * i32::MAX as i64);
    }
}
