use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{extract::Request, middleware::Next, response::Response, Router};
use axum_test::TestServer;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::districts::dtos::CreateDistrictDto;
use crate::features::districts::models::{
    District, DistrictStateDetails, DistrictWithState, NewDistrict, StatePopulationTotal,
};
use crate::features::districts::{routes as districts_routes, DistrictRepository, DistrictService};
use crate::features::states::dtos::CreateStateDto;
use crate::features::states::models::{NewState, State, StateDensity};
use crate::features::states::{routes as states_routes, StateRepository, StateService};

pub const TEST_JWT_SECRET: &str = "test-secret-for-unit-tests";

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        issuer: None,
        audience: None,
        jwt_leeway: Duration::from_secs(60),
    }
}

/// Sign an HS256 token for `sub` that expires `exp_offset_secs` from now
pub fn issue_token(secret: &str, sub: &str, exp_offset_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = json!({
        "sub": sub,
        "iat": now,
        "exp": now + exp_offset_secs,
        "roles": ["analyst"],
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn state_dto(name: &str, population: i64, area: f64) -> CreateStateDto {
    CreateStateDto {
        name: Some(json!(name)),
        population: Some(json!(population)),
        area: Some(json!(area)),
        capital: Some(json!(format!("{} City", name))),
        climate: Some(json!("Temperate")),
    }
}

pub fn district_dto(name: &str, population: serde_json::Value, state_id: Uuid) -> CreateDistrictDto {
    CreateDistrictDto {
        name: Some(json!(name)),
        population: Some(population),
        state_id: Some(json!(state_id.to_string())),
    }
}

/// In-memory stand-in for both repositories.
///
/// Mirrors the Postgres behaviour the services rely on: exact-name unique
/// constraints, insertion ordering, and inner/left join semantics for
/// districts whose state is gone.
#[derive(Default)]
pub struct InMemoryStore {
    states: RwLock<Vec<State>>,
    districts: RwLock<Vec<District>>,
}

impl InMemoryStore {
    pub async fn state_count(&self) -> usize {
        self.states.read().await.len()
    }

    pub async fn district_count(&self) -> usize {
        self.districts.read().await.len()
    }

    /// Drop a state behind the service's back, leaving its districts dangling
    pub async fn remove_state(&self, id: Uuid) {
        self.states.write().await.retain(|state| state.id != id);
    }
}

#[async_trait]
impl StateRepository for InMemoryStore {
    async fn insert(&self, new_state: &NewState) -> Result<State> {
        let mut states = self.states.write().await;
        if states.iter().any(|state| state.name == new_state.name) {
            return Err(AppError::DuplicateName(new_state.name.clone()));
        }

        let now = Utc::now();
        let state = State {
            id: Uuid::now_v7(),
            name: new_state.name.clone(),
            population: new_state.population,
            area: new_state.area,
            capital: new_state.capital.clone(),
            climate: new_state.climate.clone(),
            created_at: now,
            updated_at: now,
        };
        states.push(state.clone());
        Ok(state)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<State>> {
        let states = self.states.read().await;
        Ok(states.iter().find(|state| state.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<State>> {
        let states = self.states.read().await;
        Ok(states.iter().find(|state| state.name == name).cloned())
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<State>> {
        let needle = name.to_lowercase();
        let states = self.states.read().await;
        Ok(states
            .iter()
            .find(|state| state.name.to_lowercase() == needle)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<State>> {
        Ok(self.states.read().await.clone())
    }

    async fn total_population(&self) -> Result<Option<i64>> {
        let states = self.states.read().await;
        if states.is_empty() {
            return Ok(None);
        }
        Ok(Some(states.iter().map(|state| state.population).sum()))
    }

    async fn population_densities(&self) -> Result<Vec<StateDensity>> {
        let states = self.states.read().await;
        Ok(states
            .iter()
            .map(|state| StateDensity {
                state: state.name.clone(),
                population_density: state.population as f64 / state.area,
            })
            .collect())
    }
}

#[async_trait]
impl DistrictRepository for InMemoryStore {
    async fn insert(&self, new_district: &NewDistrict) -> Result<District> {
        let mut districts = self.districts.write().await;
        if districts
            .iter()
            .any(|district| district.name == new_district.name)
        {
            return Err(AppError::DuplicateName(new_district.name.clone()));
        }

        let now = Utc::now();
        let district = District {
            id: Uuid::now_v7(),
            name: new_district.name.clone(),
            population: new_district.population,
            state_id: new_district.state_id,
            created_at: now,
            updated_at: now,
        };
        districts.push(district.clone());
        Ok(district)
    }

    async fn update_population(&self, name: &str, population: i64) -> Result<Option<District>> {
        let needle = name.to_lowercase();
        let mut districts = self.districts.write().await;
        Ok(districts
            .iter_mut()
            .find(|district| district.name.to_lowercase() == needle)
            .map(|district| {
                district.population = population;
                district.updated_at = Utc::now();
                district.clone()
            }))
    }

    async fn delete_by_name(&self, name: &str) -> Result<Option<District>> {
        let mut districts = self.districts.write().await;
        Ok(districts
            .iter()
            .position(|district| district.name == name)
            .map(|index| districts.remove(index)))
    }

    async fn list_with_state_names(&self) -> Result<Vec<DistrictWithState>> {
        let states = self.states.read().await;
        let districts = self.districts.read().await;
        Ok(districts
            .iter()
            .map(|district| DistrictWithState {
                id: district.id,
                name: district.name.clone(),
                population: district.population,
                state_id: district.state_id,
                state_name: states
                    .iter()
                    .find(|state| state.id == district.state_id)
                    .map(|state| state.name.clone()),
                created_at: district.created_at,
                updated_at: district.updated_at,
            })
            .collect())
    }

    async fn population_by_state(&self) -> Result<Vec<StatePopulationTotal>> {
        let states = self.states.read().await;
        let districts = self.districts.read().await;

        let mut totals: Vec<StatePopulationTotal> = states
            .iter()
            .filter_map(|state| {
                let members: Vec<i64> = districts
                    .iter()
                    .filter(|district| district.state_id == state.id)
                    .map(|district| district.population)
                    .collect();
                (!members.is_empty()).then(|| StatePopulationTotal {
                    state: state.name.clone(),
                    total_population: members.iter().sum(),
                })
            })
            .collect();

        totals.sort_by(|a, b| {
            b.total_population
                .cmp(&a.total_population)
                .then_with(|| a.state.cmp(&b.state))
        });
        Ok(totals)
    }

    async fn list_with_state_details(&self) -> Result<Vec<DistrictStateDetails>> {
        let states = self.states.read().await;
        let districts = self.districts.read().await;
        Ok(districts
            .iter()
            .filter_map(|district| {
                states
                    .iter()
                    .find(|state| state.id == district.state_id)
                    .map(|state| DistrictStateDetails {
                        district: district.name.clone(),
                        population: district.population,
                        state: state.name.clone(),
                        state_population: state.population,
                        state_area: state.area,
                        state_capital: state.capital.clone(),
                    })
            })
            .collect())
    }
}

pub fn test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-sub".to_string(),
        roles: vec!["analyst".to_string()],
    }
}

async fn inject_test_user(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(test_user());
    next.run(request).await
}

pub fn with_test_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_test_user))
}

/// Both feature routers over one shared in-memory store, already authenticated
pub fn test_server() -> (TestServer, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    let state_service = Arc::new(StateService::new(store.clone()));
    let district_service = Arc::new(DistrictService::new(store.clone(), store.clone()));

    let app = with_test_auth(
        Router::new()
            .merge(states_routes::routes(state_service))
            .merge(districts_routes::routes(district_service)),
    );

    (TestServer::new(app).unwrap(), store)
}
