use super::{
    admin::build_admin_routers, auth::build_auth_routers, booking::build_booking_routers,
    event::build_event_routers, health::build_health_check_routers,
    message::build_message_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_event_routers())
        .merge(build_booking_routers())
        .merge(build_admin_routers())
        .merge(build_message_routers());
    Router::new().nest("/api/v1", router)
}
