//! Wall-clock timing of repeated operations.

use std::convert::Infallible;
use std::time::Instant;

/// Run `op` `runs` times back to back and return the total elapsed milliseconds.
///
/// Sub-millisecond remainders are truncated.
pub fn time_ms<F>(mut op: F, runs: u32) -> u64
where
    F: FnMut(),
{
    match try_time_ms::<_, Infallible>(
        || {
            op();
            Ok(())
        },
        runs,
    ) {
        Ok(ms) => ms,
        Err(never) => match never {},
    }
}

/// Fallible variant of [`time_ms`].
///
/// The first error stops the loop and is returned as-is.
pub fn try_time_ms<F, E>(mut op: F, runs: u32) -> Result<u64, E>
where
    F: FnMut() -> Result<(), E>,
{
    let start = Instant::now();
    for _ in 0..runs {
        op()?;
    }
    Ok(start.elapsed().as_millis() as u64)
}
