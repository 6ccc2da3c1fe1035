use chrono::NaiveDate;

use crate::utils::error::AppError;

/// 예약 기간 `[check_in, check_out)`. 체크아웃 날짜는 숙박일에 포함되지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayPeriod {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, AppError> {
        if check_out <= check_in {
            return Err(AppError::bad_request(
                "체크아웃 날짜는 체크인 날짜 이후여야 합니다.",
            ));
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// 반열린 구간이므로 한 예약의 체크아웃 날 다른 예약이 체크인해도 겹치지 않습니다.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// 실제 체크인/체크아웃 날짜로 청구 숙박일 수 계산 (당일 퇴실도 1박)
pub fn billable_nights(checked_in: NaiveDate, checked_out: NaiveDate) -> i64 {
    (checked_out - checked_in).num_days().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(from: u32, to: u32) -> StayPeriod {
        StayPeriod::new(date(2026, 3, from), date(2026, 3, to)).unwrap()
    }

    #[test]
    fn should_reject_empty_or_inverted_period() {
        assert!(StayPeriod::new(date(2026, 3, 5), date(2026, 3, 5)).is_err());
        assert!(StayPeriod::new(date(2026, 3, 6), date(2026, 3, 5)).is_err());
    }

    #[test]
    fn should_count_nights() {
        assert_eq!(period(1, 4).nights(), 3);
        assert_eq!(
            StayPeriod::new(date(2026, 2, 27), date(2026, 3, 2))
                .unwrap()
                .nights(),
            3
        );
    }

    #[test]
    fn should_detect_overlap() {
        assert!(period(1, 5).overlaps(&period(4, 8)));
        assert!(period(4, 8).overlaps(&period(1, 5)));
        assert!(period(1, 10).overlaps(&period(3, 4)));
    }

    #[test]
    fn back_to_back_periods_do_not_overlap() {
        assert!(!period(1, 5).overlaps(&period(5, 8)));
        assert!(!period(5, 8).overlaps(&period(1, 5)));
    }

    #[test]
    fn billable_nights_is_at_least_one() {
        assert_eq!(billable_nights(date(2026, 3, 1), date(2026, 3, 1)), 1);
        assert_eq!(billable_nights(date(2026, 3, 1), date(2026, 3, 4)), 3);
    }
}
