//! Memory layouts under test.
//!
//! | Type | `y` placement | Effect |
//! |------|---------------|--------|
//! | `SameLine` | right after `x`, same cache line | false sharing |
//! | `SplitLines` | next cache-line boundary | no false sharing |
//!
//! Both fields are plain `i32` cells that are only ever touched with volatile
//! loads and stores, so every access in the workload loops reaches memory.
//!
//! ## Lanes
//!
//! A layout is never shared directly between threads. `SharedPair::split`
//! borrows it mutably and hands out one `WriteLane` (sole owner of `x`) and one
//! `ReadLane` (reader of `y`). Each worker thread gets one lane, so the two
//! threads never touch the same field and no atomics or locks are needed.

use std::cell::UnsafeCell;
use std::marker::PhantomData;
use std::mem::{align_of, offset_of, size_of};
use std::ptr;

use static_assertions::const_assert;

use crate::constants::{CACHE_LINE_SIZE, INITIAL_X, INITIAL_Y};

/// Two fields packed into a single cache line.
///
/// The struct is aligned to the line size, and `x` and `y` sit next to each
/// other at its start, so they always share one line.
#[repr(C, align(64))]
pub struct SameLine {
    x: UnsafeCell<i32>,
    y: UnsafeCell<i32>,
}

/// Wrapper that starts its contents on a cache-line boundary.
#[repr(C, align(64))]
pub struct LineAligned<T>(pub T);

/// Two fields on separate cache lines.
///
/// `y` is pushed to the next line boundary after `x`.
#[repr(C)]
pub struct SplitLines {
    x: UnsafeCell<i32>,
    y: LineAligned<UnsafeCell<i32>>,
}

const_assert!(align_of::<SameLine>() == CACHE_LINE_SIZE);
const_assert!(offset_of!(SameLine, y) + size_of::<i32>() <= CACHE_LINE_SIZE);
const_assert!(align_of::<LineAligned<u8>>() == CACHE_LINE_SIZE);
const_assert!(offset_of!(SplitLines, y) >= CACHE_LINE_SIZE);

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::SameLine {}
    impl Sealed for super::SplitLines {}
}

/// A pair of independently addressable `i32` fields shared by a writer and a reader.
///
/// Sealed: the lanes handed out by `split` are only sound when `cells` returns
/// two distinct cells, so only `SameLine` and `SplitLines` implement it.
///
/// ```rust,compile_fail
/// use std::cell::UnsafeCell;
/// use false_sharing::SharedPair;
///
/// #[derive(Default)]
/// struct Aliased {
///     cell: UnsafeCell<i32>,
/// }
///
/// impl SharedPair for Aliased {
///     const NAME: &'static str = "aliased";
///
///     fn with_values(x: i32, _y: i32) -> Self {
///         Self { cell: UnsafeCell::new(x) }
///     }
///
///     fn cells(&self) -> (&UnsafeCell<i32>, &UnsafeCell<i32>) {
///         (&self.cell, &self.cell)
///     }
/// }
/// ```
pub trait SharedPair: sealed::Sealed + Default + Send {
    /// Human readable layout name, used in logs
    const NAME: &'static str;

    /// Create a layout with explicit initial values
    fn with_values(x: i32, y: i32) -> Self;

    /// Raw cells backing `x` and `y`, always two distinct cells
    fn cells(&self) -> (&UnsafeCell<i32>, &UnsafeCell<i32>);

    /// Hand out the writer and reader lanes for one run.
    fn split(&mut self) -> (WriteLane<'_>, ReadLane<'_>) {
        let (x, y) = self.cells();
        debug_assert!(!std::ptr::eq(x, y));
        (
            WriteLane {
                x: x.get(),
                _layout: PhantomData,
            },
            ReadLane {
                y: y.get(),
                _layout: PhantomData,
            },
        )
    }

    /// Current value of `x`
    fn x(&self) -> i32 {
        // SAFETY: no lane can be alive while `&self` is, so nothing writes concurrently
        unsafe { ptr::read_volatile(self.cells().0.get()) }
    }

    /// Current value of `y`
    fn y(&self) -> i32 {
        // SAFETY: see `x`
        unsafe { ptr::read_volatile(self.cells().1.get()) }
    }

    /// Address of `x`
    fn x_addr(&self) -> usize {
        self.cells().0.get() as usize
    }

    /// Address of `y`
    fn y_addr(&self) -> usize {
        self.cells().1.get() as usize
    }
}

impl SharedPair for SameLine {
    const NAME: &'static str = "same-line";

    fn with_values(x: i32, y: i32) -> Self {
        Self {
            x: UnsafeCell::new(x),
            y: UnsafeCell::new(y),
        }
    }

    #[inline(always)]
    fn cells(&self) -> (&UnsafeCell<i32>, &UnsafeCell<i32>) {
        (&self.x, &self.y)
    }
}

impl Default for SameLine {
    fn default() -> Self {
        Self::with_values(INITIAL_X, INITIAL_Y)
    }
}

impl SharedPair for SplitLines {
    const NAME: &'static str = "split-lines";

    fn with_values(x: i32, y: i32) -> Self {
        Self {
            x: UnsafeCell::new(x),
            y: LineAligned(UnsafeCell::new(y)),
        }
    }

    #[inline(always)]
    fn cells(&self) -> (&UnsafeCell<i32>, &UnsafeCell<i32>) {
        (&self.x, &self.y.0)
    }
}

impl Default for SplitLines {
    fn default() -> Self {
        Self::with_values(INITIAL_X, INITIAL_Y)
    }
}

/// Exclusive handle to the `x` field of a borrowed layout.
pub struct WriteLane<'a> {
    x: *mut i32,
    _layout: PhantomData<&'a mut i32>,
}

impl WriteLane<'_> {
    /// Volatile read-modify-write of `x`.
    #[inline(always)]
    pub fn increment(&mut self) {
        // SAFETY: this lane is the only accessor of `x` while the layout is split
        unsafe {
            let value = ptr::read_volatile(self.x);
            ptr::write_volatile(self.x, value.wrapping_add(1));
        }
    }
}

// SAFETY: the lane is the single owner of `x` for its lifetime
unsafe impl Send for WriteLane<'_> {}

/// Shared handle to the `y` field of a borrowed layout.
#[derive(Clone, Copy)]
pub struct ReadLane<'a> {
    y: *const i32,
    _layout: PhantomData<&'a i32>,
}

impl ReadLane<'_> {
    /// Volatile load of `y`.
    #[inline(always)]
    pub fn load(&self) -> i32 {
        // SAFETY: `y` is never written while the layout is split
        unsafe { ptr::read_volatile(self.y) }
    }
}

// SAFETY: concurrent readers of `y` never race, nothing writes it while split
unsafe impl Send for ReadLane<'_> {}
