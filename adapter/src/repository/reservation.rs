use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use derive_new::new;
use kernel::model::{
    id::{ReservationId, RestaurantId},
    list::{ListOptions, PaginatedList},
    reservation::{event::CreateReservation, DailyVisitorCount, Reservation, ReservationStatus},
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::reservation::{DailyVisitorCountRow, ReservationRow},
    ConnectionPool,
};

const SELECT_RESERVATION: &str = r#"
    SELECT
        r.reservation_id,
        r.restaurant_id,
        r.customer_id,
        m.nickname,
        m.phone,
        r.status,
        r.visit_date,
        r.visit_time,
        r.visitor_count,
        r.customer_memo
    FROM reservations AS r
    INNER JOIN members AS m ON r.customer_id = m.member_id
"#;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;

        let reservation_id = ReservationId::new();
        let input = &event.customer_input;
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                (reservation_id, customer_id, restaurant_id, status,
                visit_date, visit_time, visitor_count, customer_memo)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(reservation_id)
        .bind(event.customer_id)
        .bind(event.restaurant_id)
        .bind(event.status.as_ref())
        .bind(input.visit_date())
        .bind(input.visit_time())
        .bind(input.visitor_count())
        .bind(input.customer_memo())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(reservation_id)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> =
            sqlx::query_as(&format!("{SELECT_RESERVATION} WHERE r.reservation_id = $1"))
                .bind(reservation_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn find_all_by_restaurant_id_and_status(
        &self,
        restaurant_id: RestaurantId,
        status: ReservationStatus,
        options: ListOptions,
    ) -> AppResult<PaginatedList<Reservation>> {
        let ListOptions { limit, offset } = options;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*)
                FROM reservations
                WHERE restaurant_id = $1 AND status = $2
            "#,
        )
        .bind(restaurant_id)
        .bind(status.as_ref())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"{SELECT_RESERVATION}
                WHERE r.restaurant_id = $1 AND r.status = $2
                ORDER BY r.created_at ASC, r.visit_date ASC, r.visit_time ASC
                LIMIT $3 OFFSET $4
            "#
        ))
        .bind(restaurant_id)
        .bind(status.as_ref())
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let items = rows
            .into_iter()
            .map(Reservation::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PaginatedList {
            total,
            limit,
            offset,
            items,
        })
    }

    async fn count_total_visitor_count(
        &self,
        restaurant_id: RestaurantId,
        visit_date: NaiveDate,
        visit_time: NaiveTime,
        statuses: &[ReservationStatus],
    ) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COALESCE(SUM(visitor_count), 0)::BIGINT
                FROM reservations
                WHERE restaurant_id = $1
                  AND visit_date = $2
                  AND visit_time = $3
                  AND status = ANY($4)
            "#,
        )
        .bind(restaurant_id)
        .bind(visit_date)
        .bind(visit_time)
        .bind(status_names(statuses))
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_total_visitor_count_per_day(
        &self,
        restaurant_id: RestaurantId,
        statuses: &[ReservationStatus],
    ) -> AppResult<Vec<DailyVisitorCount>> {
        let rows: Vec<DailyVisitorCountRow> = sqlx::query_as(
            r#"
                SELECT visit_date, SUM(visitor_count)::BIGINT AS total_count
                FROM reservations
                WHERE restaurant_id = $1
                  AND status = ANY($2)
                GROUP BY visit_date
                ORDER BY visit_date
            "#,
        )
        .bind(restaurant_id)
        .bind(status_names(statuses))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(DailyVisitorCount::from).collect())
    }
}

fn status_names(statuses: &[ReservationStatus]) -> Vec<String> {
    statuses.iter().map(|s| s.as_ref().to_string()).collect()
}
