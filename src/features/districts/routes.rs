use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::districts::handlers;
use crate::features::districts::services::DistrictService;

/// Create routes for the districts feature
pub fn routes(service: Arc<DistrictService>) -> Router {
    Router::new()
        .route("/addDistrict", post(handlers::add_district))
        .route("/districts", get(handlers::list_districts))
        .route(
            "/districts/group-by-state",
            get(handlers::group_districts_by_state),
        )
        .route(
            "/districts/with-states",
            get(handlers::get_districts_with_states),
        )
        .route("/districts/{name}", delete(handlers::delete_district))
        .route(
            "/districts/{name}/population",
            put(handlers::update_district_population),
        )
        .with_state(service)
}
