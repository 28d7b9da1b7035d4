use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use kernel::model::{
    id::{MemberId, ReservationId, RestaurantId},
    reservation::{
        DailyVisitorCount, Reservation, ReservationCustomer, ReservationCustomerInput,
        ReservationStatus,
    },
};
use shared::error::AppError;
use sqlx::FromRow;

// 予約一覧を取得する際に使う型。顧客の表示名と電話番号も一緒に読む
#[derive(FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub restaurant_id: RestaurantId,
    pub customer_id: MemberId,
    pub nickname: String,
    pub phone: String,
    pub status: String,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
    pub visitor_count: i32,
    pub customer_memo: String,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            restaurant_id,
            customer_id,
            nickname,
            phone,
            status,
            visit_date,
            visit_time,
            visitor_count,
            customer_memo,
        } = value;
        let status = ReservationStatus::from_str(&status)
            .map_err(|e| AppError::ConversionEntityError(format!("status {status}: {e}")))?;
        Ok(Reservation {
            reservation_id,
            restaurant_id,
            customer: ReservationCustomer {
                customer_id,
                nickname,
                phone,
            },
            status,
            customer_input: ReservationCustomerInput::restore(
                visit_date,
                visit_time,
                visitor_count,
                customer_memo,
            ),
        })
    }
}

#[derive(FromRow)]
pub struct DailyVisitorCountRow {
    pub visit_date: NaiveDate,
    pub total_count: i64,
}

impl From<DailyVisitorCountRow> for DailyVisitorCount {
    fn from(value: DailyVisitorCountRow) -> Self {
        let DailyVisitorCountRow {
            visit_date,
            total_count,
        } = value;
        DailyVisitorCount {
            visit_date,
            total_count,
        }
    }
}
