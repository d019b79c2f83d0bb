use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Persisted state record
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct State {
    pub id: Uuid,
    pub name: String,
    pub population: i64,
    pub area: f64,
    pub capital: String,
    pub climate: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parsed input for a state insert.
///
/// Presence and type checks happen while parsing the request body; the
/// derived rules here are the numeric bounds.
#[derive(Debug, Clone, Validate)]
pub struct NewState {
    pub name: String,
    #[validate(range(
        min = 0,
        max = 1_500_000_000,
        message = "population must be between 0 and 1500000000"
    ))]
    pub population: i64,
    #[validate(range(
        exclusive_min = 0.0,
        max = 3_300_000.0,
        message = "area must be greater than 0 and at most 3300000"
    ))]
    pub area: f64,
    pub capital: String,
    pub climate: String,
}

/// Population density projection (population / area)
#[derive(Debug, Clone, FromRow)]
pub struct StateDensity {
    pub state: String,
    pub population_density: f64,
}
