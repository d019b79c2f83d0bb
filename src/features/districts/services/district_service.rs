use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::districts::dtos::{CreateDistrictDto, UpdateDistrictPopulationDto};
use crate::features::districts::models::{
    District, DistrictStateDetails, DistrictWithState, NewDistrict, StatePopulationTotal,
};
use crate::features::districts::repositories::DistrictRepository;
use crate::features::states::repositories::StateRepository;
use crate::shared::constants::MSG_INVALID_DISTRICT_UPDATE;
use crate::shared::validation::{as_integer, is_present, trimmed_text};

/// Service for district records and the district/state aggregations
pub struct DistrictService {
    districts: Arc<dyn DistrictRepository>,
    states: Arc<dyn StateRepository>,
}

impl DistrictService {
    pub fn new(districts: Arc<dyn DistrictRepository>, states: Arc<dyn StateRepository>) -> Self {
        Self { districts, states }
    }

    /// Validate and persist a new district.
    ///
    /// The state reference is resolved first, so an unknown `state_id` is
    /// reported whatever else is wrong with the payload. The lookup and the
    /// insert are separate statements; no operation removes states, so the
    /// reference cannot go stale in between.
    pub async fn create(&self, dto: CreateDistrictDto) -> Result<District> {
        let state_id = self.resolve_state_id(dto.state_id.as_ref()).await?;

        let name = trimmed_text(dto.name.as_ref())
            .ok_or_else(|| AppError::Validation("name: Path `name` is required.".to_string()))?;

        let population = match dto.population.as_ref() {
            None | Some(serde_json::Value::Null) => {
                return Err(AppError::Validation(
                    "population: Path `population` is required.".to_string(),
                ))
            }
            Some(value) => as_integer(value).ok_or_else(|| {
                AppError::Validation("population: must be a whole number".to_string())
            })?,
        };

        let new_district = NewDistrict {
            name,
            population,
            state_id,
        };
        new_district
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let district = self
            .districts
            .insert(&new_district)
            .await
            .map_err(|e| match e {
                AppError::DuplicateName(name) => {
                    AppError::Validation(format!("name: district '{}' already exists", name))
                }
                other => other,
            })?;

        tracing::info!(
            "District created: id={}, name={}, state_id={}",
            district.id,
            district.name,
            district.state_id
        );
        Ok(district)
    }

    async fn resolve_state_id(&self, raw: Option<&serde_json::Value>) -> Result<Uuid> {
        let id = raw
            .and_then(|value| value.as_str())
            .ok_or_else(|| AppError::InvalidReference("state_id is missing".to_string()))
            .and_then(|text| {
                Uuid::parse_str(text.trim()).map_err(|_| {
                    AppError::InvalidReference(format!("'{}' is not a valid state id", text))
                })
            })?;

        match self.states.find_by_id(id).await? {
            Some(state) => Ok(state.id),
            None => Err(AppError::InvalidReference(format!(
                "state {} does not exist",
                id
            ))),
        }
    }

    /// Set a district's population, matching its name case-insensitively
    pub async fn update_population(
        &self,
        name: &str,
        dto: UpdateDistrictPopulationDto,
    ) -> Result<District> {
        let name = name.trim();
        let population = dto
            .population
            .as_ref()
            .filter(|value| is_present(Some(*value)))
            .and_then(as_integer)
            .filter(|population| *population > 0);

        let population = match population {
            Some(population) if !name.is_empty() => population,
            _ => return Err(AppError::InvalidInput(MSG_INVALID_DISTRICT_UPDATE.to_string())),
        };

        let district = self
            .districts
            .update_population(name, population)
            .await?
            .ok_or_else(|| AppError::NotFound("District not found.".to_string()))?;

        tracing::info!(
            "District population updated: name={}, population={}",
            district.name,
            district.population
        );
        Ok(district)
    }

    /// Delete the district with exactly this (case-sensitive) name
    pub async fn delete(&self, name: &str) -> Result<District> {
        let district = self
            .districts
            .delete_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound("District not found".to_string()))?;

        tracing::info!("District deleted: id={}, name={}", district.id, district.name);
        Ok(district)
    }

    /// All districts with their state's name; an empty store is `NotFound`
    pub async fn list(&self) -> Result<Vec<DistrictWithState>> {
        let districts = self.districts.list_with_state_names().await?;
        if districts.is_empty() {
            return Err(AppError::NotFound("No districts found.".to_string()));
        }
        Ok(districts)
    }

    pub async fn population_by_state(&self) -> Result<Vec<StatePopulationTotal>> {
        self.districts.population_by_state().await
    }

    pub async fn with_state_details(&self) -> Result<Vec<DistrictStateDetails>> {
        self.districts.list_with_state_details().await
    }
}
