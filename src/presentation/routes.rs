// Router wiring
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    create_scale, delete_scale, get_scale, list_scales, ping, update_scale,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route(
            "/scale",
            get(get_scale)
                .post(create_scale)
                .patch(update_scale)
                .delete(delete_scale),
        )
        .route("/scales", get(list_scales))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
