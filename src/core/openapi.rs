use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::districts::{dtos as districts_dtos, handlers as districts_handlers};
use crate::features::states::{dtos as states_dtos, handlers as states_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // States
        states_handlers::add_state,
        states_handlers::get_state_population,
        states_handlers::get_total_population,
        states_handlers::get_average_population_density,
        states_handlers::list_states,
        // Districts
        districts_handlers::add_district,
        districts_handlers::update_district_population,
        districts_handlers::delete_district,
        districts_handlers::group_districts_by_state,
        districts_handlers::get_districts_with_states,
        districts_handlers::list_districts,
    ),
    components(
        schemas(
            // Auth
            auth::model::AuthenticatedUser,
            // States
            states_dtos::CreateStateDto,
            states_dtos::StateResponseDto,
            states_dtos::StatePopulationDto,
            states_dtos::TotalPopulationDto,
            states_dtos::PopulationDensityDto,
            ApiResponse<states_dtos::StateResponseDto>,
            ApiResponse<Vec<states_dtos::StateResponseDto>>,
            ApiResponse<states_dtos::StatePopulationDto>,
            ApiResponse<states_dtos::TotalPopulationDto>,
            ApiResponse<Vec<states_dtos::PopulationDensityDto>>,
            // Districts
            districts_dtos::CreateDistrictDto,
            districts_dtos::UpdateDistrictPopulationDto,
            districts_dtos::DistrictResponseDto,
            districts_dtos::StateRefDto,
            districts_dtos::DistrictWithStateDto,
            districts_dtos::StateTotalPopulationDto,
            districts_dtos::DistrictStateDetailsDto,
            ApiResponse<districts_dtos::DistrictResponseDto>,
            ApiResponse<Vec<districts_dtos::DistrictWithStateDto>>,
            ApiResponse<Vec<districts_dtos::StateTotalPopulationDto>>,
            ApiResponse<Vec<districts_dtos::DistrictStateDetailsDto>>,
        )
    ),
    tags(
        (name = "states", description = "States and their population statistics"),
        (name = "districts", description = "Districts and district/state aggregations"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "State & District API",
        version = "0.1.0",
        description = "Population and density statistics for states and districts",
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` JWT security scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Overrides the document's info block with values from `SwaggerConfig`
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
