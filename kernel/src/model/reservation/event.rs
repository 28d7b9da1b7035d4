use chrono::NaiveDateTime;
use derive_new::new;

use super::{ReservationCustomerInput, ReservationStatus};
use crate::model::id::{MemberId, RestaurantId};

// 顧客からの予約依頼。検証前の値をそのまま持つ
#[derive(Debug, Clone, new)]
pub struct RequestReservation {
    pub restaurant_id: RestaurantId,
    pub visit_at: NaiveDateTime,
    pub visitor_count: i32,
    pub memo: String,
}

#[derive(Debug, new)]
pub struct CreateReservation {
    pub customer_id: MemberId,
    pub restaurant_id: RestaurantId,
    pub status: ReservationStatus,
    pub customer_input: ReservationCustomerInput,
}
