//! Half-open date interval predicate used by the availability engine.
//!
//! A stay occupies `[check_in, check_out)`: the check-out day itself is
//! free, so a booking ending on a given day and another starting on that
//! same day do not conflict (same-day turnover).

use chrono::NaiveDate;

/// Two half-open intervals `[a, b)` and `[c, d)` overlap iff `a < d && c < b`.
pub fn overlaps(a: NaiveDate, b: NaiveDate, c: NaiveDate, d: NaiveDate) -> bool {
    a < d && c < b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn identical_intervals_overlap() {
        assert!(overlaps(d("2024-01-01"), d("2024-01-05"), d("2024-01-01"), d("2024-01-05")));
    }

    #[test]
    fn partial_overlap_detected() {
        assert!(overlaps(d("2024-03-10"), d("2024-03-15"), d("2024-03-12"), d("2024-03-20")));
    }

    #[test]
    fn containment_overlaps() {
        assert!(overlaps(d("2024-01-01"), d("2024-01-31"), d("2024-01-10"), d("2024-01-12")));
    }

    #[test]
    fn disjoint_intervals_do_not_overlap() {
        assert!(!overlaps(d("2024-01-01"), d("2024-01-05"), d("2024-02-01"), d("2024-02-05")));
    }

    #[test]
    fn same_day_turnover_is_not_overlap() {
        // One stay ends the day the next begins.
        assert!(!overlaps(d("2024-01-01"), d("2024-01-05"), d("2024-01-05"), d("2024-01-08")));
        assert!(!overlaps(d("2024-01-05"), d("2024-01-08"), d("2024-01-01"), d("2024-01-05")));
    }

    #[test]
    fn one_night_against_surrounding_stay() {
        assert!(overlaps(d("2024-05-02"), d("2024-05-03"), d("2024-05-01"), d("2024-05-10")));
    }
}
