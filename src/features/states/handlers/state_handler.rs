use std::sync::Arc;

use axum::extract::{Path, State};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::states::dtos::{
    CreateStateDto, PopulationDensityDto, StatePopulationDto, StateResponseDto,
    TotalPopulationDto,
};
use crate::features::states::services::StateService;
use crate::shared::types::ApiResponse;

/// Create a state
#[utoipa::path(
    post,
    path = "/addState",
    request_body = CreateStateDto,
    responses(
        (status = 201, description = "State added successfully", body = ApiResponse<StateResponseDto>),
        (status = 400, description = "Missing field, duplicate name, invalid population/area or validation failure"),
        (status = 401, description = "Unauthorized"),
    ),
    tag = "states",
    security(("bearer_auth" = []))
)]
pub async fn add_state(
    _user: AuthenticatedUser,
    State(service): State<Arc<StateService>>,
    body: Option<AppJson<CreateStateDto>>,
) -> Result<ApiResponse<StateResponseDto>> {
    let dto = body.map(|AppJson(dto)| dto).unwrap_or_default();
    tracing::debug!("Add state request body: {:?}", dto);

    let state = service.create(dto).await?;
    Ok(ApiResponse::created(
        state.into(),
        "State added successfully",
    ))
}

/// Get the population of one state (case-insensitive name match)
#[utoipa::path(
    get,
    path = "/states/{name}/population",
    params(
        ("name" = String, Path, description = "State name, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "State population", body = ApiResponse<StatePopulationDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "State not found")
    ),
    tag = "states",
    security(("bearer_auth" = []))
)]
pub async fn get_state_population(
    _user: AuthenticatedUser,
    State(service): State<Arc<StateService>>,
    Path(name): Path<String>,
) -> Result<ApiResponse<StatePopulationDto>> {
    tracing::debug!("Fetching population for state: {}", name);

    let state = service.get_by_name(&name).await?;
    Ok(ApiResponse::ok(
        state.into(),
        "State population retrieved successfully.",
    ))
}

/// Sum of population across all states
#[utoipa::path(
    get,
    path = "/states/total-population",
    responses(
        (status = 200, description = "Total population", body = ApiResponse<TotalPopulationDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No states found")
    ),
    tag = "states",
    security(("bearer_auth" = []))
)]
pub async fn get_total_population(
    _user: AuthenticatedUser,
    State(service): State<Arc<StateService>>,
) -> Result<ApiResponse<TotalPopulationDto>> {
    let total_population = service.total_population().await?;
    Ok(ApiResponse::ok(
        TotalPopulationDto { total_population },
        "Total population calculated successfully",
    ))
}

/// Population density (population / area) of every state
#[utoipa::path(
    get,
    path = "/states/average-density",
    responses(
        (status = 200, description = "Density per state", body = ApiResponse<Vec<PopulationDensityDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "states",
    security(("bearer_auth" = []))
)]
pub async fn get_average_population_density(
    _user: AuthenticatedUser,
    State(service): State<Arc<StateService>>,
) -> Result<ApiResponse<Vec<PopulationDensityDto>>> {
    let densities = service.population_densities().await?;
    Ok(ApiResponse::ok(
        densities.into_iter().map(Into::into).collect(),
        "Average population density calculated successfully.",
    ))
}

/// List all states
#[utoipa::path(
    get,
    path = "/states",
    responses(
        (status = 200, description = "All states", body = ApiResponse<Vec<StateResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No states found")
    ),
    tag = "states",
    security(("bearer_auth" = []))
)]
pub async fn list_states(
    _user: AuthenticatedUser,
    State(service): State<Arc<StateService>>,
) -> Result<ApiResponse<Vec<StateResponseDto>>> {
    let states = service.list().await?;
    Ok(ApiResponse::ok(
        states.into_iter().map(Into::into).collect(),
        "States retrieved successfully.",
    ))
}
