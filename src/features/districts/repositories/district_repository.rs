use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::districts::models::{
    District, DistrictStateDetails, DistrictWithState, NewDistrict, StatePopulationTotal,
};

/// Persistence port for districts, including the joins against states
#[async_trait]
pub trait DistrictRepository: Send + Sync {
    /// Insert a district. A name clash reported by the store surfaces as
    /// `AppError::DuplicateName`.
    async fn insert(&self, new_district: &NewDistrict) -> Result<District>;

    /// Set the population of the first district whose name matches
    /// case-insensitively and return the updated row
    async fn update_population(&self, name: &str, population: i64) -> Result<Option<District>>;

    /// Remove the district with exactly this name and return it
    async fn delete_by_name(&self, name: &str) -> Result<Option<District>>;

    /// All districts in insertion order, with the state name when it resolves
    async fn list_with_state_names(&self) -> Result<Vec<DistrictWithState>>;

    /// District population summed per resolvable state, largest first
    async fn population_by_state(&self) -> Result<Vec<StatePopulationTotal>>;

    /// Districts inner-joined with their state's details, in insertion order
    async fn list_with_state_details(&self) -> Result<Vec<DistrictStateDetails>>;
}
