use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use shared::error::AppResult;

use crate::model::{
    id::{ReservationId, RestaurantId},
    list::{ListOptions, PaginatedList},
    reservation::{event::CreateReservation, DailyVisitorCount, Reservation, ReservationStatus},
};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    // 店舗とステータスで絞り込んだ予約をページ単位で返す
    async fn find_all_by_restaurant_id_and_status(
        &self,
        restaurant_id: RestaurantId,
        status: ReservationStatus,
        options: ListOptions,
    ) -> AppResult<PaginatedList<Reservation>>;
    // 指定の予約枠に入っている来店人数の合計
    async fn count_total_visitor_count(
        &self,
        restaurant_id: RestaurantId,
        visit_date: NaiveDate,
        visit_time: NaiveTime,
        statuses: &[ReservationStatus],
    ) -> AppResult<i64>;
    // 予約のある日ごとの来店人数の合計
    async fn find_total_visitor_count_per_day(
        &self,
        restaurant_id: RestaurantId,
        statuses: &[ReservationStatus],
    ) -> AppResult<Vec<DailyVisitorCount>>;
}
