use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A candidate stay: one check-in / check-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        DateRange {
            check_in,
            check_out,
        }
    }

    /// Number of nights, as the reservation site counts them.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// The stay the user asked for, plus how many days either side they will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub flexible_days: u32,
}

impl DateRequest {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate, flexible_days: u32) -> Self {
        DateRequest {
            check_in,
            check_out,
            flexible_days,
        }
    }

    /// Candidate ranges in priority order: the exact request first, then for
    /// each offset 1, 2, ... the later shift before the earlier one. Stay
    /// length is preserved. Always 1 + 2 * flexible_days entries; no dedup
    /// and no past-date filtering here.
    pub fn date_variants(&self) -> Vec<DateRange> {
        let stay = Duration::days((self.check_out - self.check_in).num_days());
        let mut variants = vec![DateRange::new(self.check_in, self.check_out)];
        for offset in 1..=i64::from(self.flexible_days) {
            for sign in [1, -1] {
                let check_in = self.check_in + Duration::days(offset * sign);
                variants.push(DateRange::new(check_in, check_in + stay));
            }
        }
        variants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn exact_range_comes_first() {
        let req = DateRequest::new(d(2026, 7, 10), d(2026, 7, 13), 3);
        let variants = req.date_variants();
        assert_eq!(variants[0], DateRange::new(d(2026, 7, 10), d(2026, 7, 13)));
    }

    #[test]
    fn variant_count_is_one_plus_twice_flexible_days() {
        for n in 0..5 {
            let req = DateRequest::new(d(2026, 7, 10), d(2026, 7, 13), n);
            assert_eq!(req.date_variants().len(), 1 + 2 * n as usize);
        }
    }

    #[test]
    fn zero_flexible_days_yields_only_exact_range() {
        let req = DateRequest::new(d(2026, 7, 10), d(2026, 7, 12), 0);
        assert_eq!(
            req.date_variants(),
            vec![DateRange::new(d(2026, 7, 10), d(2026, 7, 12))]
        );
    }

    #[test]
    fn variants_ordered_by_offset_later_before_earlier() {
        let req = DateRequest::new(d(2026, 7, 10), d(2026, 7, 13), 2);
        let expected = vec![
            DateRange::new(d(2026, 7, 10), d(2026, 7, 13)),
            DateRange::new(d(2026, 7, 11), d(2026, 7, 14)),
            DateRange::new(d(2026, 7, 9), d(2026, 7, 12)),
            DateRange::new(d(2026, 7, 12), d(2026, 7, 15)),
            DateRange::new(d(2026, 7, 8), d(2026, 7, 11)),
        ];
        assert_eq!(req.date_variants(), expected);
    }

    #[test]
    fn stay_length_preserved_across_variants() {
        let req = DateRequest::new(d(2026, 8, 1), d(2026, 8, 5), 3);
        for v in req.date_variants() {
            assert_eq!(v.nights(), 4);
        }
    }
}
