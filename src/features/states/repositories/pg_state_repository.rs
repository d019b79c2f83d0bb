use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::states::models::{NewState, State, StateDensity};
use crate::features::states::repositories::StateRepository;

const STATE_COLUMNS: &str =
    "id, name, population, area, capital, climate, created_at, updated_at";

/// PostgreSQL-backed state store
pub struct PgStateRepository {
    pool: PgPool,
}

impl PgStateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StateRepository for PgStateRepository {
    async fn insert(&self, new_state: &NewState) -> Result<State> {
        let query = format!(
            r#"
            INSERT INTO states (id, name, population, area, capital, climate)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {STATE_COLUMNS}
            "#
        );

        sqlx::query_as::<_, State>(&query)
            .bind(Uuid::now_v7())
            .bind(&new_state.name)
            .bind(new_state.population)
            .bind(new_state.area)
            .bind(&new_state.capital)
            .bind(&new_state.climate)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::DuplicateName(new_state.name.clone());
                }
                tracing::error!("Failed to insert state {}: {:?}", new_state.name, e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<State>> {
        let query = format!("SELECT {STATE_COLUMNS} FROM states WHERE id = $1");

        sqlx::query_as::<_, State>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch state by id {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<State>> {
        let query = format!("SELECT {STATE_COLUMNS} FROM states WHERE name = $1");

        sqlx::query_as::<_, State>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch state by name {}: {:?}", name, e);
                AppError::Database(e)
            })
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<State>> {
        let query = format!(
            r#"
            SELECT {STATE_COLUMNS}
            FROM states
            WHERE LOWER(name) = LOWER($1)
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#
        );

        sqlx::query_as::<_, State>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up state {}: {:?}", name, e);
                AppError::Database(e)
            })
    }

    async fn list(&self) -> Result<Vec<State>> {
        let query = format!("SELECT {STATE_COLUMNS} FROM states ORDER BY created_at ASC, id ASC");

        sqlx::query_as::<_, State>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list states: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn total_population(&self) -> Result<Option<i64>> {
        // SUM(BIGINT) is NUMERIC in Postgres and NULL over zero rows
        sqlx::query_scalar::<_, Option<i64>>("SELECT SUM(population)::BIGINT FROM states")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to sum state population: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn population_densities(&self) -> Result<Vec<StateDensity>> {
        sqlx::query_as::<_, StateDensity>(
            r#"
            SELECT name AS state, population::DOUBLE PRECISION / area AS population_density
            FROM states
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to compute population densities: {:?}", e);
            AppError::Database(e)
        })
    }
}
