use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::districts::models::{
    District, DistrictStateDetails, DistrictWithState, NewDistrict, StatePopulationTotal,
};
use crate::features::districts::repositories::DistrictRepository;

const DISTRICT_COLUMNS: &str = "id, name, population, state_id, created_at, updated_at";

/// PostgreSQL-backed district store
pub struct PgDistrictRepository {
    pool: PgPool,
}

impl PgDistrictRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DistrictRepository for PgDistrictRepository {
    async fn insert(&self, new_district: &NewDistrict) -> Result<District> {
        let query = format!(
            r#"
            INSERT INTO districts (id, name, population, state_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {DISTRICT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, District>(&query)
            .bind(Uuid::now_v7())
            .bind(&new_district.name)
            .bind(new_district.population)
            .bind(new_district.state_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::DuplicateName(new_district.name.clone());
                }
                tracing::error!("Failed to insert district {}: {:?}", new_district.name, e);
                AppError::Database(e)
            })
    }

    async fn update_population(&self, name: &str, population: i64) -> Result<Option<District>> {
        let query = format!(
            r#"
            UPDATE districts
            SET population = $2, updated_at = NOW()
            WHERE id = (
                SELECT id FROM districts
                WHERE LOWER(name) = LOWER($1)
                ORDER BY created_at ASC, id ASC
                LIMIT 1
            )
            RETURNING {DISTRICT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, District>(&query)
            .bind(name)
            .bind(population)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update population of district {}: {:?}", name, e);
                AppError::Database(e)
            })
    }

    async fn delete_by_name(&self, name: &str) -> Result<Option<District>> {
        let query = format!("DELETE FROM districts WHERE name = $1 RETURNING {DISTRICT_COLUMNS}");

        sqlx::query_as::<_, District>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete district {}: {:?}", name, e);
                AppError::Database(e)
            })
    }

    async fn list_with_state_names(&self) -> Result<Vec<DistrictWithState>> {
        sqlx::query_as::<_, DistrictWithState>(
            r#"
            SELECT d.id, d.name, d.population, d.state_id, s.name AS state_name,
                   d.created_at, d.updated_at
            FROM districts d
            LEFT JOIN states s ON s.id = d.state_id
            ORDER BY d.created_at ASC, d.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list districts: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn population_by_state(&self) -> Result<Vec<StatePopulationTotal>> {
        sqlx::query_as::<_, StatePopulationTotal>(
            r#"
            SELECT s.name AS state, SUM(d.population)::BIGINT AS total_population
            FROM districts d
            INNER JOIN states s ON s.id = d.state_id
            GROUP BY s.id, s.name
            ORDER BY total_population DESC, s.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to group districts by state: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn list_with_state_details(&self) -> Result<Vec<DistrictStateDetails>> {
        sqlx::query_as::<_, DistrictStateDetails>(
            r#"
            SELECT d.name AS district, d.population,
                   s.name AS state, s.population AS state_population,
                   s.area AS state_area, s.capital AS state_capital
            FROM districts d
            INNER JOIN states s ON s.id = d.state_id
            ORDER BY d.created_at ASC, d.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to join districts with states: {:?}", e);
            AppError::Database(e)
        })
    }
}
