use std::{collections::HashMap, sync::Arc};

use chrono::{Duration, NaiveDate, NaiveTime};
use derive_new::new;
use shared::error::{AppError, AppResult};

use super::{member::MemberService, restaurant::RestaurantService};
use crate::{
    clock::Clock,
    model::{
        id::{MemberId, ReservationId, RestaurantId},
        list::{ListOptions, PaginatedList},
        reservation::{
            customer_input::truncate_to_hour,
            event::{CreateReservation, RequestReservation},
            policy::MAX_RESERVE_PERIOD_DAYS,
            ReservationCustomerInput, ReservationStatus, ReservationSummary,
        },
    },
    repository::reservation::ReservationRepository,
};

#[derive(new)]
pub struct ReservationService {
    reservation_repository: Arc<dyn ReservationRepository>,
    restaurant_service: Arc<RestaurantService>,
    member_service: Arc<MemberService>,
    clock: Arc<dyn Clock>,
}

impl ReservationService {
    /// 顧客の予約を受け付け、`PENDING` 状態で保存する。
    ///
    /// 入力値の検証に加え、定休日・営業時間外・予約枠の空席不足の場合は
    /// `AppError::UnprocessableEntity` で拒否する。空席の判定と保存は別々に行うため、
    /// 同じ枠への同時予約は防げない。
    pub async fn reserve(
        &self,
        customer_id: MemberId,
        request: RequestReservation,
    ) -> AppResult<ReservationId> {
        let customer = self.member_service.find_customer_by_id(customer_id).await?;
        let restaurant = self
            .restaurant_service
            .find_by_id(request.restaurant_id)
            .await?;

        let customer_input = ReservationCustomerInput::new(
            request.visit_at,
            request.visitor_count,
            request.memo,
            self.clock.as_ref(),
        )?;

        if restaurant.is_closing_day(customer_input.visit_date()) {
            return Err(reject(format!(
                "restaurant ({}) is closed on {}",
                restaurant.restaurant_id(),
                customer_input.visit_date()
            )));
        }

        if !restaurant.is_available_visit_date_time(customer_input.visit_date_time()) {
            return Err(reject(format!(
                "visit time {} is outside business hours of restaurant ({})",
                customer_input.visit_time(),
                restaurant.restaurant_id()
            )));
        }

        let total_count = self
            .reservation_repository
            .count_total_visitor_count(
                restaurant.restaurant_id(),
                customer_input.visit_date(),
                customer_input.visit_time(),
                &ReservationStatus::OCCUPYING,
            )
            .await?;
        if !restaurant.is_available_visitor_count(total_count, customer_input.visitor_count()) {
            return Err(reject(format!(
                "not enough seats at {} for {} visitors",
                customer_input.visit_date_time(),
                customer_input.visitor_count()
            )));
        }

        let reservation_id = self
            .reservation_repository
            .create(CreateReservation::new(
                customer.member_id,
                restaurant.restaurant_id(),
                ReservationStatus::Pending,
                customer_input,
            ))
            .await?;

        tracing::info!(
            reservation_id = %reservation_id,
            restaurant_id = %restaurant.restaurant_id(),
            customer_id = %customer.member_id,
            "reservation created"
        );

        Ok(reservation_id)
    }

    pub async fn get_restaurant_reservations(
        &self,
        restaurant_id: RestaurantId,
        status: ReservationStatus,
        options: ListOptions,
    ) -> AppResult<PaginatedList<ReservationSummary>> {
        self.restaurant_service
            .validate_restaurant_exists(restaurant_id)
            .await?;

        self.reservation_repository
            .find_all_by_restaurant_id_and_status(restaurant_id, status, options)
            .await
            .map(|page| page.map(ReservationSummary::from))
    }

    /// 今日から受付期間内で、定休日でも満席でもない日付を返す。
    pub async fn get_available_dates(&self, restaurant_id: RestaurantId) -> AppResult<Vec<NaiveDate>> {
        let restaurant = self.restaurant_service.find_by_id(restaurant_id).await?;

        let totals: HashMap<NaiveDate, i64> = self
            .reservation_repository
            .find_total_visitor_count_per_day(restaurant_id, &ReservationStatus::OCCUPYING)
            .await?
            .into_iter()
            .map(|daily| (daily.visit_date, daily.total_count))
            .collect();

        let today = self.clock.now().date();
        let dates = (0..MAX_RESERVE_PERIOD_DAYS)
            .map(|offset| today + Duration::days(offset))
            .filter(|date| !restaurant.is_closing_day(*date))
            .filter(|date| {
                let total = totals.get(date).copied().unwrap_or_default();
                !restaurant.is_not_reserve_available_for_day(total)
            })
            .collect();

        Ok(dates)
    }

    /// 指定日の予約枠のうち、`visitor_count` 人が入れるものを返す。
    ///
    /// 日付が今日より前、または受付期間を過ぎている場合は空を返す。
    pub async fn get_available_times(
        &self,
        restaurant_id: RestaurantId,
        date: NaiveDate,
        visitor_count: i32,
    ) -> AppResult<Vec<NaiveTime>> {
        let restaurant = self.restaurant_service.find_by_id(restaurant_id).await?;
        let now = self.clock.now();
        let today = now.date();
        // 予約受付期間外の日付や定休日には枠を出さない
        if date < today
            || date >= today + Duration::days(MAX_RESERVE_PERIOD_DAYS)
            || restaurant.is_closing_day(date)
        {
            return Ok(Vec::new());
        }

        // 現在の時間帯以前の枠は受け付けない
        let earliest = truncate_to_hour(now);

        let mut times = Vec::new();
        for time in restaurant.generate_time_table() {
            if date.and_time(time) <= earliest {
                continue;
            }
            let total = self
                .reservation_repository
                .count_total_visitor_count(
                    restaurant_id,
                    date,
                    time,
                    &ReservationStatus::OCCUPYING,
                )
                .await?;
            if restaurant.is_available_visitor_count(total, visitor_count) {
                times.push(time);
            }
        }

        Ok(times)
    }
}

fn reject(message: String) -> AppError {
    tracing::debug!(reason = %message, "reservation rejected");
    AppError::UnprocessableEntity(message)
}
