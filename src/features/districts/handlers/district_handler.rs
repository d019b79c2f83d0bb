use std::sync::Arc;

use axum::extract::{Path, State};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::districts::dtos::{
    CreateDistrictDto, DistrictResponseDto, DistrictStateDetailsDto, DistrictWithStateDto,
    StateTotalPopulationDto, UpdateDistrictPopulationDto,
};
use crate::features::districts::services::DistrictService;
use crate::shared::types::ApiResponse;

/// Create a district belonging to an existing state
#[utoipa::path(
    post,
    path = "/addDistrict",
    request_body = CreateDistrictDto,
    responses(
        (status = 201, description = "District added successfully", body = ApiResponse<DistrictResponseDto>),
        (status = 400, description = "Unknown state_id or validation failure"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "districts",
    security(("bearer_auth" = []))
)]
pub async fn add_district(
    _user: AuthenticatedUser,
    State(service): State<Arc<DistrictService>>,
    body: Option<AppJson<CreateDistrictDto>>,
) -> Result<ApiResponse<DistrictResponseDto>> {
    let dto = body.map(|AppJson(dto)| dto).unwrap_or_default();
    tracing::debug!("Add district request body: {:?}", dto);

    let district = service.create(dto).await?;
    Ok(ApiResponse::created(
        district.into(),
        "District added successfully",
    ))
}

/// Update a district's population (case-insensitive name match)
#[utoipa::path(
    put,
    path = "/districts/{name}/population",
    params(
        ("name" = String, Path, description = "District name, matched case-insensitively")
    ),
    request_body = UpdateDistrictPopulationDto,
    responses(
        (status = 200, description = "Updated district", body = ApiResponse<DistrictResponseDto>),
        (status = 400, description = "Missing name or non-positive population"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "District not found")
    ),
    tag = "districts",
    security(("bearer_auth" = []))
)]
pub async fn update_district_population(
    _user: AuthenticatedUser,
    State(service): State<Arc<DistrictService>>,
    Path(name): Path<String>,
    body: Option<AppJson<UpdateDistrictPopulationDto>>,
) -> Result<ApiResponse<DistrictResponseDto>> {
    let dto = body.map(|AppJson(dto)| dto).unwrap_or_default();
    tracing::debug!(
        "Updating population for district: {} to {:?}",
        name,
        dto.population
    );

    let district = service.update_population(&name, dto).await?;
    Ok(ApiResponse::ok(
        district.into(),
        "District population updated successfully.",
    ))
}

/// Delete a district by exact name
#[utoipa::path(
    delete,
    path = "/districts/{name}",
    params(
        ("name" = String, Path, description = "District name, matched exactly")
    ),
    responses(
        (status = 200, description = "Deleted district", body = ApiResponse<DistrictResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "District not found")
    ),
    tag = "districts",
    security(("bearer_auth" = []))
)]
pub async fn delete_district(
    _user: AuthenticatedUser,
    State(service): State<Arc<DistrictService>>,
    Path(name): Path<String>,
) -> Result<ApiResponse<DistrictResponseDto>> {
    let district = service.delete(&name).await?;
    Ok(ApiResponse::ok(
        district.into(),
        format!("District '{}' deleted successfully", name),
    ))
}

/// Total district population per state, largest first
#[utoipa::path(
    get,
    path = "/districts/group-by-state",
    responses(
        (status = 200, description = "Grouped totals", body = ApiResponse<Vec<StateTotalPopulationDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "districts",
    security(("bearer_auth" = []))
)]
pub async fn group_districts_by_state(
    _user: AuthenticatedUser,
    State(service): State<Arc<DistrictService>>,
) -> Result<ApiResponse<Vec<StateTotalPopulationDto>>> {
    let totals = service.population_by_state().await?;
    Ok(ApiResponse::ok(
        totals.into_iter().map(Into::into).collect(),
        "Districts grouped and sorted by state successfully.",
    ))
}

/// Districts joined with their state's details
#[utoipa::path(
    get,
    path = "/districts/with-states",
    responses(
        (status = 200, description = "Joined rows", body = ApiResponse<Vec<DistrictStateDetailsDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "districts",
    security(("bearer_auth" = []))
)]
pub async fn get_districts_with_states(
    _user: AuthenticatedUser,
    State(service): State<Arc<DistrictService>>,
) -> Result<ApiResponse<Vec<DistrictStateDetailsDto>>> {
    let rows = service.with_state_details().await?;
    Ok(ApiResponse::ok(
        rows.into_iter().map(Into::into).collect(),
        "Districts joined with states successfully.",
    ))
}

/// List all districts with the name of their state
#[utoipa::path(
    get,
    path = "/districts",
    responses(
        (status = 200, description = "All districts", body = ApiResponse<Vec<DistrictWithStateDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No districts found")
    ),
    tag = "districts",
    security(("bearer_auth" = []))
)]
pub async fn list_districts(
    _user: AuthenticatedUser,
    State(service): State<Arc<DistrictService>>,
) -> Result<ApiResponse<Vec<DistrictWithStateDto>>> {
    let districts = service.list().await?;
    Ok(ApiResponse::ok(
        districts.into_iter().map(Into::into).collect(),
        "Districts retrieved successfully.",
    ))
}
