use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::event::{show_event, show_event_list};

pub fn build_event_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_event_list))
        .route("/:event_id", get(show_event));

    Router::new().nest("/events", routers)
}
