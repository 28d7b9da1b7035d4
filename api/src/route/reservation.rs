use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::reservation::reserve_restaurant;

pub fn build_reservation_routers() -> Router<AppRegistry> {
    Router::new().route("/customers/:customer_id/reservations", post(reserve_restaurant))
}
