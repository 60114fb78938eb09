//! Unix-second time helpers.
//! Timestamps are `i64` seconds as reported by the `Clock` sysvar.

/// Seconds elapsed from `start_ts` to `now_ts`, clamped at zero.
pub fn elapsed_since(now_ts: i64, start_ts: i64) -> u64 {
    if now_ts <= start_ts {
        return 0;
    }
    now_ts.abs_diff(start_ts)
}

/// True once `now_ts` has reached `deadline_ts` (inclusive).
pub fn has_passed(now_ts: i64, deadline_ts: i64) -> bool {
    now_ts >= deadline_ts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    #[test]
    fn elapsed_clamps_before_start() {
        assert_eq!(elapsed_since(100, 200), 0);
        assert_eq!(elapsed_since(200, 200), 0);
        assert_eq!(elapsed_since(200 + SECONDS_PER_DAY, 200), 86_400);
    }

    #[test]
    fn elapsed_spans_full_range() {
        assert_eq!(elapsed_since(i64::MAX, i64::MIN), u64::MAX);
    }

    #[test]
    fn deadline_is_inclusive() {
        assert!(!has_passed(99, 100));
        assert!(has_passed(100, 100));
        assert!(has_passed(101, 100));
    }
}
