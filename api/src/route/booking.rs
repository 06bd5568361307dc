use axum::{
    routing::{get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    admin::show_all_bookings,
    booking::{cancel_booking, register_booking, show_my_bookings, update_booking_status},
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_booking))
        .route("/mine", get(show_my_bookings))
        .route("/all", get(show_all_bookings))
        .route("/:booking_id/status", patch(update_booking_status))
        .route("/:booking_id/cancel", patch(cancel_booking));

    Router::new().nest("/bookings", routers)
}
