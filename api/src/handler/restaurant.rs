use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{MemberId, RestaurantId},
    restaurant::event::CreateRestaurant,
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::{
    list::{ListQuery, PaginatedResponse},
    restaurant::{CreateRestaurantRequest, RestaurantRegisteredResponse, RestaurantResponse},
};

pub async fn register_restaurant(
    Path(owner_id): Path<MemberId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRestaurantRequest>,
) -> AppResult<(StatusCode, Json<RestaurantRegisteredResponse>)> {
    req.validate(&())?;

    let event = CreateRestaurant::try_from(req)?;
    let restaurant_id = registry
        .restaurant_service()
        .save(owner_id, event)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RestaurantRegisteredResponse { restaurant_id }),
    ))
}

pub async fn show_restaurant_list(
    Query(query): Query<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaginatedResponse<RestaurantResponse>>> {
    query.validate(&())?;

    registry
        .restaurant_service()
        .get_restaurants(query.into())
        .await
        .map(PaginatedResponse::from)
        .map(Json)
}

pub async fn show_restaurant(
    Path(restaurant_id): Path<RestaurantId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RestaurantResponse>> {
    registry
        .restaurant_service()
        .find_by_id(restaurant_id)
        .await
        .map(RestaurantResponse::from)
        .map(Json)
}
