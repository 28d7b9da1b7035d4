use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    reservation::{show_available_dates, show_available_times, show_restaurant_reservations},
    restaurant::{register_restaurant, show_restaurant, show_restaurant_list},
};

pub fn build_restaurant_routers() -> Router<AppRegistry> {
    let restaurants_routers = Router::new()
        .route("/", get(show_restaurant_list))
        .route("/:restaurant_id", get(show_restaurant))
        .route(
            "/:restaurant_id/reservations",
            get(show_restaurant_reservations),
        )
        .route("/:restaurant_id/available-dates", get(show_available_dates))
        .route("/:restaurant_id/available-times", get(show_available_times));

    Router::new()
        .nest("/restaurants", restaurants_routers)
        .route("/owners/:owner_id/restaurants", post(register_restaurant))
}
