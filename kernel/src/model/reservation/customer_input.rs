use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Timelike};
use shared::error::{AppError, AppResult};

use super::policy::{MAX_MEMO_LENGTH, MAX_RESERVE_PERIOD_DAYS, MAX_VISITOR_COUNT, MIN_VISITOR_COUNT};
use crate::clock::Clock;

const MINUTE_FORMAT: u32 = 0;
const SECOND_FORMAT: u32 = 0;

/// 顧客が予約時に入力する内容。
///
/// 生成時にすべての検証を済ませるため、このインスタンスが存在する時点で
/// 来店日時・人数・メモはいずれも受付条件を満たしている。
/// 検証は「受付期間 → 時刻の形式 → 人数 → メモ」の順に行い、最初に失敗したものを返す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationCustomerInput {
    visit_date: NaiveDate,
    visit_time: NaiveTime,
    visitor_count: i32,
    customer_memo: String,
}

impl ReservationCustomerInput {
    pub fn new(
        visit_date_time: NaiveDateTime,
        visitor_count: i32,
        customer_memo: String,
        clock: &dyn Clock,
    ) -> AppResult<Self> {
        validate_visit_boundary(visit_date_time, clock.now())?;
        validate_time_format(visit_date_time.time())?;
        validate_visitor_count(visitor_count)?;
        validate_memo(&customer_memo)?;

        Ok(Self {
            visit_date: visit_date_time.date(),
            visit_time: visit_date_time.time().trunc_subsecs(0),
            visitor_count,
            customer_memo,
        })
    }

    // 保存済みの予約を読み戻すときに使う。受付時の検証は済んでいるので再検証しない
    pub fn restore(
        visit_date: NaiveDate,
        visit_time: NaiveTime,
        visitor_count: i32,
        customer_memo: String,
    ) -> Self {
        Self {
            visit_date,
            visit_time,
            visitor_count,
            customer_memo,
        }
    }

    pub fn visit_date(&self) -> NaiveDate {
        self.visit_date
    }

    pub fn visit_time(&self) -> NaiveTime {
        self.visit_time
    }

    pub fn visitor_count(&self) -> i32 {
        self.visitor_count
    }

    pub fn customer_memo(&self) -> &str {
        &self.customer_memo
    }

    pub fn visit_date_time(&self) -> NaiveDateTime {
        self.visit_date.and_time(self.visit_time)
    }

    pub fn check_visiting_today(&self, clock: &dyn Clock) -> bool {
        self.visit_date == clock.now().date()
    }
}

pub(crate) fn truncate_to_hour(date_time: NaiveDateTime) -> NaiveDateTime {
    date_time.date().and_time(NaiveTime::MIN) + Duration::hours(i64::from(date_time.hour()))
}

fn validate_visit_boundary(visit_date_time: NaiveDateTime, now: NaiveDateTime) -> AppResult<()> {
    if visit_date_time <= truncate_to_hour(now) {
        return Err(AppError::InvalidValue(
            "Field visitTime must be after the next hour based on the current date time.".into(),
        ));
    }

    let limit_date = now.date() + Duration::days(MAX_RESERVE_PERIOD_DAYS);
    if visit_date_time.date() >= limit_date {
        return Err(AppError::InvalidValue(format!(
            "Field visitDate must be within {MAX_RESERVE_PERIOD_DAYS} days."
        )));
    }
    Ok(())
}

fn validate_time_format(visit_time: NaiveTime) -> AppResult<()> {
    if visit_time.minute() != MINUTE_FORMAT || visit_time.second() != SECOND_FORMAT {
        return Err(AppError::InvalidValue(format!(
            "Field visitTime's minute must be {MINUTE_FORMAT} and second must be {SECOND_FORMAT}."
        )));
    }
    Ok(())
}

fn validate_visitor_count(visitor_count: i32) -> AppResult<()> {
    if !(MIN_VISITOR_COUNT..=MAX_VISITOR_COUNT).contains(&visitor_count) {
        return Err(AppError::InvalidValue(format!(
            "Field visitorCount must be between {MIN_VISITOR_COUNT} and {MAX_VISITOR_COUNT}"
        )));
    }
    Ok(())
}

fn validate_memo(memo: &str) -> AppResult<()> {
    if memo.chars().count() > MAX_MEMO_LENGTH {
        return Err(AppError::InvalidValue(format!(
            "Memo length must be under {MAX_MEMO_LENGTH}."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use rstest::{fixture, rstest};

    // 2024-01-10 13:25:00 を現在時刻とする
    #[fixture]
    fn clock() -> FixedClock {
        FixedClock::new(at(2024, 1, 10, 13, 25, 0))
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn error_message(res: AppResult<ReservationCustomerInput>) -> String {
        match res {
            Err(AppError::InvalidValue(msg)) => msg,
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(9)]
    #[case(-3)]
    fn visitor_count_out_of_range_is_rejected(clock: FixedClock, #[case] count: i32) {
        let res = ReservationCustomerInput::new(at(2024, 1, 11, 18, 0, 0), count, "".into(), &clock);
        assert!(error_message(res).contains("visitorCount"));
    }

    #[rstest]
    fn visitor_count_in_range_is_accepted(clock: FixedClock, #[values(2, 3, 5, 8)] count: i32) {
        let input =
            ReservationCustomerInput::new(at(2024, 1, 11, 18, 0, 0), count, "".into(), &clock)
                .unwrap();
        assert_eq!(input.visitor_count(), count);
    }

    #[rstest]
    fn memo_up_to_300_chars_is_accepted(clock: FixedClock) {
        let memo = "a".repeat(300);
        let input =
            ReservationCustomerInput::new(at(2024, 1, 11, 18, 0, 0), 4, memo.clone(), &clock)
                .unwrap();
        assert_eq!(input.customer_memo(), memo);
    }

    #[rstest]
    fn memo_over_300_chars_is_rejected(clock: FixedClock) {
        let res =
            ReservationCustomerInput::new(at(2024, 1, 11, 18, 0, 0), 4, "a".repeat(301), &clock);
        assert!(error_message(res).contains("Memo"));
    }

    #[rstest]
    #[case(at(2024, 1, 11, 18, 30, 0))]
    #[case(at(2024, 1, 11, 18, 0, 1))]
    #[case(at(2024, 1, 11, 18, 59, 59))]
    fn visit_time_off_the_hour_is_rejected(clock: FixedClock, #[case] visit_at: NaiveDateTime) {
        let res = ReservationCustomerInput::new(visit_at, 4, "".into(), &clock);
        assert!(error_message(res).contains("minute must be 0"));
    }

    #[rstest]
    fn sub_second_part_is_truncated(clock: FixedClock) {
        let visit_at = at(2024, 1, 11, 18, 0, 0) + Duration::milliseconds(500);
        let input = ReservationCustomerInput::new(visit_at, 4, "".into(), &clock).unwrap();
        assert_eq!(input.visit_time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[rstest]
    // 現在時刻を切り捨てた 13:00 以前は受け付けない
    #[case(at(2024, 1, 10, 12, 0, 0))]
    #[case(at(2024, 1, 10, 13, 0, 0))]
    #[case(at(2024, 1, 9, 18, 0, 0))]
    fn visit_at_or_before_current_hour_is_rejected(
        clock: FixedClock,
        #[case] visit_at: NaiveDateTime,
    ) {
        let res = ReservationCustomerInput::new(visit_at, 4, "".into(), &clock);
        assert!(error_message(res).contains("after the next hour"));
    }

    #[rstest]
    #[case(at(2024, 2, 9, 10, 0, 0))]
    #[case(at(2024, 3, 1, 10, 0, 0))]
    fn visit_date_beyond_30_days_is_rejected(clock: FixedClock, #[case] visit_at: NaiveDateTime) {
        let res = ReservationCustomerInput::new(visit_at, 4, "".into(), &clock);
        assert!(error_message(res).contains("within 30 days"));
    }

    #[rstest]
    #[case(at(2024, 1, 10, 14, 0, 0))]
    #[case(at(2024, 1, 20, 12, 0, 0))]
    #[case(at(2024, 2, 8, 23, 0, 0))]
    fn visit_between_next_hour_and_30_days_is_accepted(
        clock: FixedClock,
        #[case] visit_at: NaiveDateTime,
    ) {
        let input = ReservationCustomerInput::new(visit_at, 4, "window seat".into(), &clock).unwrap();
        assert_eq!(input.visit_date_time(), visit_at);
        assert_eq!(input.visit_date(), visit_at.date());
    }

    #[rstest]
    fn boundary_is_checked_before_other_fields(clock: FixedClock) {
        let res = ReservationCustomerInput::new(
            at(2024, 1, 9, 18, 30, 0),
            20,
            "a".repeat(301),
            &clock,
        );
        assert!(error_message(res).contains("after the next hour"));

        let res = ReservationCustomerInput::new(
            at(2024, 1, 11, 18, 30, 0),
            20,
            "a".repeat(301),
            &clock,
        );
        assert!(error_message(res).contains("minute must be 0"));

        let res =
            ReservationCustomerInput::new(at(2024, 1, 11, 18, 0, 0), 20, "a".repeat(301), &clock);
        assert!(error_message(res).contains("visitorCount"));
    }

    #[rstest]
    fn visiting_today(clock: FixedClock) {
        let today =
            ReservationCustomerInput::new(at(2024, 1, 10, 19, 0, 0), 2, "".into(), &clock).unwrap();
        let tomorrow =
            ReservationCustomerInput::new(at(2024, 1, 11, 19, 0, 0), 2, "".into(), &clock).unwrap();
        assert!(today.check_visiting_today(&clock));
        assert!(!tomorrow.check_visiting_today(&clock));
    }

    #[test]
    fn truncate_to_hour_drops_minutes_and_seconds() {
        assert_eq!(
            truncate_to_hour(at(2024, 1, 10, 13, 25, 42)),
            at(2024, 1, 10, 13, 0, 0)
        );
    }
}
