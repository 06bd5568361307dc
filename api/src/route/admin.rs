use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::admin::{
    admin_login, purge_bookings, show_all_bookings, update_booking_status,
};

pub fn build_admin_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/login", post(admin_login))
        .route("/bookings", get(show_all_bookings))
        .route("/bookings/all", delete(purge_bookings))
        .route("/bookings/:booking_id", patch(update_booking_status));

    Router::new().nest("/admin", routers)
}
