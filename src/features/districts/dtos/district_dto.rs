use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::districts::models::{
    District, DistrictStateDetails, DistrictWithState, StatePopulationTotal,
};

/// Request DTO for creating a district
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateDistrictDto {
    #[schema(value_type = String, example = "Ernakulam")]
    #[serde(default)]
    pub name: Option<Value>,
    #[schema(value_type = i64, example = 3282388)]
    #[serde(default)]
    pub population: Option<Value>,
    /// Identifier of an existing state
    #[schema(value_type = Uuid)]
    #[serde(default)]
    pub state_id: Option<Value>,
}

/// Request DTO for updating a district's population
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDistrictPopulationDto {
    #[schema(value_type = i64, example = 3300000)]
    #[serde(default)]
    pub population: Option<Value>,
}

/// Response DTO for a district record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponseDto {
    pub id: Uuid,
    pub name: String,
    pub population: i64,
    #[serde(rename = "state_id")]
    pub state_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<District> for DistrictResponseDto {
    fn from(district: District) -> Self {
        Self {
            id: district.id,
            name: district.name,
            population: district.population,
            state_id: district.state_id,
            created_at: district.created_at,
            updated_at: district.updated_at,
        }
    }
}

/// Minimal view of the state a district belongs to
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StateRefDto {
    pub id: Uuid,
    pub name: String,
}

/// District with its state's name resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictWithStateDto {
    pub id: Uuid,
    pub name: String,
    pub population: i64,
    #[serde(rename = "state_id")]
    pub state_id: Uuid,
    /// `null` when the referenced state no longer exists
    pub state: Option<StateRefDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DistrictWithState> for DistrictWithStateDto {
    fn from(row: DistrictWithState) -> Self {
        let state = row.state_name.map(|name| StateRefDto {
            id: row.state_id,
            name,
        });

        Self {
            id: row.id,
            name: row.name,
            population: row.population,
            state_id: row.state_id,
            state,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Total district population for one state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateTotalPopulationDto {
    pub state: String,
    pub total_population: i64,
}

impl From<StatePopulationTotal> for StateTotalPopulationDto {
    fn from(row: StatePopulationTotal) -> Self {
        Self {
            state: row.state,
            total_population: row.total_population,
        }
    }
}

/// District joined with its state's details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictStateDetailsDto {
    pub district: String,
    pub population: i64,
    pub state: String,
    pub state_population: i64,
    pub state_area: f64,
    pub state_capital: String,
}

impl From<DistrictStateDetails> for DistrictStateDetailsDto {
    fn from(row: DistrictStateDetails) -> Self {
        Self {
            district: row.district,
            population: row.population,
            state: row.state,
            state_population: row.state_population,
            state_area: row.state_area,
            state_capital: row.state_capital,
        }
    }
}
