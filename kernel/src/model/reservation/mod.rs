use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::model::id::{MemberId, ReservationId, RestaurantId};

pub mod customer_input;
pub mod event;
pub mod policy;

pub use customer_input::ReservationCustomerInput;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Visited,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    // 席数の集計対象になるステータス
    pub const OCCUPYING: [ReservationStatus; 2] =
        [ReservationStatus::Pending, ReservationStatus::Confirmed];
}

#[derive(Debug, Clone)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub restaurant_id: RestaurantId,
    pub customer: ReservationCustomer,
    pub status: ReservationStatus,
    pub customer_input: ReservationCustomerInput,
}

#[derive(Debug, Clone)]
pub struct ReservationCustomer {
    pub customer_id: MemberId,
    pub nickname: String,
    pub phone: String,
}

// 店舗向けの予約一覧に出す項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationSummary {
    pub reservation_id: ReservationId,
    pub customer_name: String,
    pub customer_phone: String,
    pub visit_date_time: NaiveDateTime,
    pub visitor_count: i32,
    pub status: ReservationStatus,
}

impl From<Reservation> for ReservationSummary {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            customer,
            status,
            customer_input,
            ..
        } = value;
        Self {
            reservation_id,
            customer_name: customer.nickname,
            customer_phone: customer.phone,
            visit_date_time: customer_input.visit_date_time(),
            visitor_count: customer_input.visitor_count(),
            status,
        }
    }
}

// 日付ごとの来店人数の合計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyVisitorCount {
    pub visit_date: chrono::NaiveDate,
    pub total_count: i64,
}
