/// Returns true once at least `interval` seconds separate `now` from the
/// last completed draw. A clock behind `last_draw_timestamp` is never due.
pub fn is_due(now: i64, last_draw_timestamp: i64, interval: u64) -> bool {
    if now < last_draw_timestamp {
        return false;
    }
    (now as i128 - last_draw_timestamp as i128) >= interval as i128
}

/// Seconds elapsed since the last draw, clamped at zero.
pub fn elapsed_since(now: i64, last_draw_timestamp: i64) -> u64 {
    now.saturating_sub(last_draw_timestamp).max(0) as u64
}
