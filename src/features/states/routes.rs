use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::states::handlers;
use crate::features::states::services::StateService;

/// Create routes for the states feature
pub fn routes(service: Arc<StateService>) -> Router {
    Router::new()
        .route("/addState", post(handlers::add_state))
        .route("/states", get(handlers::list_states))
        .route(
            "/states/total-population",
            get(handlers::get_total_population),
        )
        .route(
            "/states/average-density",
            get(handlers::get_average_population_density),
        )
        .route(
            "/states/{name}/population",
            get(handlers::get_state_population),
        )
        .with_state(service)
}
