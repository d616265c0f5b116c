// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tick-rate constants and wall-clock conversion.

use std::time::Duration;

/// Nominal playback rate in frames per second
pub const FRAME_RATE: u32 = 25;

/// Interval between ticks at the nominal frame rate
pub const TICK_INTERVAL: Duration = Duration::from_millis(40);

/// Convert a wall-clock delay to a whole number of tick cycles.
///
/// Delays shorter than one tick cannot be represented at the nominal
/// frame rate and yield `None`. Anything longer rounds up, so the
/// returned cycle count always covers at least the requested delay.
pub fn cycles_for(delay: Duration) -> Option<u32> {
    if delay < TICK_INTERVAL {
        return None;
    }
    let cycles = delay.as_millis().div_ceil(TICK_INTERVAL.as_millis());
    Some(u32::try_from(cycles).unwrap_or(u32::MAX))
}
