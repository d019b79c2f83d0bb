use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::states::dtos::CreateStateDto;
use crate::features::states::models::{NewState, State, StateDensity};
use crate::features::states::repositories::StateRepository;

/// Service for state records and state-level statistics
pub struct StateService {
    repository: Arc<dyn StateRepository>,
}

impl StateService {
    pub fn new(repository: Arc<dyn StateRepository>) -> Self {
        Self { repository }
    }

    /// Validate and persist a new state.
    ///
    /// Checks run in order: required fields, name uniqueness, numeric
    /// bounds, field types.
    pub async fn create(&self, dto: CreateStateDto) -> Result<State> {
        if !dto.has_required_fields() {
            return Err(AppError::MissingField);
        }

        if let Some(name) = dto.trimmed_name() {
            if self.repository.find_by_name(&name).await?.is_some() {
                return Err(AppError::DuplicateName(name));
            }
        }

        dto.check_bounds()?;
        let new_state = NewState::try_from(&dto)?;

        new_state
            .validate()
            .map_err(|e| AppError::OutOfRange(e.to_string()))?;

        let state = self.repository.insert(&new_state).await?;
        tracing::info!("State created: id={}, name={}", state.id, state.name);

        Ok(state)
    }

    /// Case-insensitive lookup by exact name
    pub async fn get_by_name(&self, name: &str) -> Result<State> {
        self.repository
            .find_by_name_ignore_case(name.trim())
            .await?
            .ok_or_else(|| AppError::NotFound("State not found.".to_string()))
    }

    /// All states; an empty store is reported as `NotFound`
    pub async fn list(&self) -> Result<Vec<State>> {
        let states = self.repository.list().await?;
        if states.is_empty() {
            return Err(AppError::NotFound("No states found.".to_string()));
        }
        Ok(states)
    }

    pub async fn total_population(&self) -> Result<i64> {
        self.repository
            .total_population()
            .await?
            .ok_or_else(|| AppError::NotFound("No states found".to_string()))
    }

    pub async fn population_densities(&self) -> Result<Vec<StateDensity>> {
        self.repository.population_densities().await
    }
}
