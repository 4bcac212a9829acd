//! Pure statistics over counter state.
//!
//! These functions only read the counters they are given. Ties are broken
//! in favor of the earliest bucket: the scans run left to right and only a
//! strictly better count replaces the current best.

/// Sums a counter array.
pub fn total(counts: &[u64]) -> u64 {
    counts.iter().sum()
}

/// Returns the hour with the highest count, earliest hour on ties.
pub fn busiest_hour(hour_counts: &[u64; 24]) -> usize {
    let mut busiest = 0;
    for (hour, &count) in hour_counts.iter().enumerate().skip(1) {
        if count > hour_counts[busiest] {
            busiest = hour;
        }
    }
    busiest
}

/// Returns the hour with the lowest count, earliest hour on ties.
pub fn quietest_hour(hour_counts: &[u64; 24]) -> usize {
    let mut quietest = 0;
    for (hour, &count) in hour_counts.iter().enumerate().skip(1) {
        if count < hour_counts[quietest] {
            quietest = hour;
        }
    }
    quietest
}

/// Returns the starting hour of the busiest two-consecutive-hour window.
///
/// Every adjacent pair `(h, h + 1)` for `h` in `0..=22` is considered, so
/// windows overlap. Earliest start wins on ties.
pub fn busiest_two_hour_window(hour_counts: &[u64; 24]) -> usize {
    let mut busiest = 0;
    let mut busiest_total = hour_counts[0] + hour_counts[1];
    for start in 1..23 {
        let window_total = hour_counts[start] + hour_counts[start + 1];
        if window_total > busiest_total {
            busiest_total = window_total;
            busiest = start;
        }
    }
    busiest
}
