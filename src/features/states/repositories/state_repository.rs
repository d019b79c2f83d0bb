use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::states::models::{NewState, State, StateDensity};

/// Persistence port for states.
///
/// Aggregations are pushed down to the store so that the database engine does
/// the grouping and arithmetic.
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Insert a state. A name clash reported by the store surfaces as
    /// `AppError::DuplicateName`.
    async fn insert(&self, new_state: &NewState) -> Result<State>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<State>>;

    /// Case-sensitive exact match, as enforced by the unique constraint
    async fn find_by_name(&self, name: &str) -> Result<Option<State>>;

    /// Case-insensitive exact match; earliest created row wins on ties
    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<State>>;

    /// All states in insertion order
    async fn list(&self) -> Result<Vec<State>>;

    /// Sum of population, `None` when there are no states
    async fn total_population(&self) -> Result<Option<i64>>;

    /// `population / area` per state in insertion order
    async fn population_densities(&self) -> Result<Vec<StateDensity>>;
}
