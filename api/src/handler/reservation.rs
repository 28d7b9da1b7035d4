use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{MemberId, RestaurantId};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::{
    list::PaginatedResponse,
    reservation::{
        AvailableDatesResponse, AvailableTimesQuery, AvailableTimesResponse,
        CreateReservationRequest, ReservationCreatedResponse, ReservationListQuery,
        ReservationSummaryResponse,
    },
};

pub async fn reserve_restaurant(
    Path(customer_id): Path<MemberId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationCreatedResponse>)> {
    let reservation_id = registry
        .reservation_service()
        .reserve(customer_id, req.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationCreatedResponse { reservation_id }),
    ))
}

pub async fn show_restaurant_reservations(
    Path(restaurant_id): Path<RestaurantId>,
    Query(query): Query<ReservationListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedResponse<ReservationSummaryResponse>>> {
    query.validate(&())?;

    registry
        .reservation_service()
        .get_restaurant_reservations(restaurant_id, query.status, query.list_options())
        .await
        .map(PaginatedResponse::from)
        .map(Json)
}

pub async fn show_available_dates(
    Path(restaurant_id): Path<RestaurantId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailableDatesResponse>> {
    registry
        .reservation_service()
        .get_available_dates(restaurant_id)
        .await
        .map(|dates| Json(AvailableDatesResponse { dates }))
}

pub async fn show_available_times(
    Path(restaurant_id): Path<RestaurantId>,
    Query(query): Query<AvailableTimesQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailableTimesResponse>> {
    query.validate(&())?;

    registry
        .reservation_service()
        .get_available_times(restaurant_id, query.date, query.visitor_count)
        .await
        .map(|times| Json(AvailableTimesResponse { times }))
}
