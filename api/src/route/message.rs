use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::message::{
    create_message, delete_message, show_message_list, update_message_status,
};

pub fn build_message_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(create_message))
        .route("/", get(show_message_list))
        .route("/:message_id", patch(update_message_status))
        .route("/:message_id", delete(delete_message));

    Router::new().nest("/messages", routers)
}
