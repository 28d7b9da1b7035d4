use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use garde::Validate;
use kernel::model::{
    id::{ReservationId, RestaurantId},
    list::ListOptions,
    reservation::{
        event::RequestReservation,
        policy::{MAX_VISITOR_COUNT, MIN_VISITOR_COUNT},
        ReservationStatus, ReservationSummary,
    },
};
use serde::{Deserialize, Serialize};

use super::list::default_limit;

// 値の範囲は ReservationCustomerInput 側で検証する
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub restaurant_id: RestaurantId,
    pub visit_at: NaiveDateTime,
    pub visitor_count: i32,
    pub memo: String,
}

impl From<CreateReservationRequest> for RequestReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
            restaurant_id,
            visit_at,
            visitor_count,
            memo,
        } = value;
        RequestReservation::new(restaurant_id, visit_at, visitor_count, memo)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreatedResponse {
    pub reservation_id: ReservationId,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListQuery {
    #[garde(skip)]
    #[serde(default)]
    pub status: ReservationStatus,
    #[garde(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
}

impl ReservationListQuery {
    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummaryResponse {
    pub reservation_id: ReservationId,
    pub customer_name: String,
    pub customer_phone: String,
    pub visit_date_time: NaiveDateTime,
    pub visitor_count: i32,
    pub status: ReservationStatus,
}

impl From<ReservationSummary> for ReservationSummaryResponse {
    fn from(value: ReservationSummary) -> Self {
        let ReservationSummary {
            reservation_id,
            customer_name,
            customer_phone,
            visit_date_time,
            visitor_count,
            status,
        } = value;
        Self {
            reservation_id,
            customer_name,
            customer_phone,
            visit_date_time,
            visitor_count,
            status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AvailableDatesResponse {
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTimesQuery {
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(range(min = MIN_VISITOR_COUNT, max = MAX_VISITOR_COUNT))]
    pub visitor_count: i32,
}

#[derive(Debug, Serialize)]
pub struct AvailableTimesResponse {
    pub times: Vec<NaiveTime>,
}
