use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Persisted district record
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct District {
    pub id: Uuid,
    pub name: String,
    pub population: i64,
    pub state_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parsed input for a district insert; `state_id` has already been resolved
#[derive(Debug, Clone, Validate)]
pub struct NewDistrict {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 1, message = "population must be a positive number"))]
    pub population: i64,
    pub state_id: Uuid,
}

/// District with the name of its state attached (`None` when the reference
/// no longer resolves)
#[derive(Debug, Clone, FromRow)]
pub struct DistrictWithState {
    pub id: Uuid,
    pub name: String,
    pub population: i64,
    pub state_id: Uuid,
    pub state_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Summed district population for one state
#[derive(Debug, Clone, FromRow)]
pub struct StatePopulationTotal {
    pub state: String,
    pub total_population: i64,
}

/// District joined with the details of its state
#[derive(Debug, Clone, FromRow)]
pub struct DistrictStateDetails {
    pub district: String,
    pub population: i64,
    pub state: String,
    pub state_population: i64,
    pub state_area: f64,
    pub state_capital: String,
}
