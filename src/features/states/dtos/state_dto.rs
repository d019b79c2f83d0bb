use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::states::models::{NewState, State, StateDensity};
use crate::shared::constants::{MAX_STATE_AREA, MAX_STATE_POPULATION};
use crate::shared::validation::{as_integer, as_number, is_present, trimmed_text};

/// Request DTO for creating a state.
///
/// Fields are kept as raw JSON so that absent, blank and non-numeric values
/// map onto the documented error responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateStateDto {
    #[schema(value_type = String, example = "Kerala")]
    #[serde(default)]
    pub name: Option<Value>,
    #[schema(value_type = i64, example = 35699443)]
    #[serde(default)]
    pub population: Option<Value>,
    /// Area in square kilometres
    #[schema(value_type = f64, example = 38863)]
    #[serde(default)]
    pub area: Option<Value>,
    #[schema(value_type = String, example = "Thiruvananthapuram")]
    #[serde(default)]
    pub capital: Option<Value>,
    #[schema(value_type = String, example = "Tropical")]
    #[serde(default)]
    pub climate: Option<Value>,
}

impl CreateStateDto {
    /// Every field is present and truthy
    pub fn has_required_fields(&self) -> bool {
        [
            &self.name,
            &self.population,
            &self.area,
            &self.capital,
            &self.climate,
        ]
        .into_iter()
        .all(|field| is_present(field.as_ref()))
    }

    pub fn trimmed_name(&self) -> Option<String> {
        trimmed_text(self.name.as_ref())
    }

    /// Bounds on the coerced numeric values.
    ///
    /// Runs before the type checks, so `1500000000.5` is out of range rather
    /// than "not an integer". Values that do not coerce to a number pass here
    /// and are rejected by the conversion into [`NewState`].
    pub fn check_bounds(&self) -> Result<(), AppError> {
        if let Some(population) = self.population.as_ref().and_then(as_number) {
            if !(0.0..=MAX_STATE_POPULATION as f64).contains(&population) {
                return Err(AppError::OutOfRange(format!(
                    "population must be between 0 and {}",
                    MAX_STATE_POPULATION
                )));
            }
        }

        if let Some(area) = self.area.as_ref().and_then(as_number) {
            if !(0.0..=MAX_STATE_AREA).contains(&area) {
                return Err(AppError::OutOfRange(format!(
                    "area must be greater than 0 and at most {}",
                    MAX_STATE_AREA
                )));
            }
        }

        Ok(())
    }
}

impl TryFrom<&CreateStateDto> for NewState {
    type Error = AppError;

    fn try_from(dto: &CreateStateDto) -> Result<Self, Self::Error> {
        if !dto.has_required_fields() {
            return Err(AppError::MissingField);
        }

        let text = |field: &Option<Value>, label: &str| {
            trimmed_text(field.as_ref())
                .ok_or_else(|| AppError::Validation(format!("{}: must be a string", label)))
        };

        let population = dto
            .population
            .as_ref()
            .and_then(as_integer)
            .ok_or_else(|| AppError::Validation("population: must be an integer".to_string()))?;
        let area = dto
            .area
            .as_ref()
            .and_then(as_number)
            .ok_or_else(|| AppError::Validation("area: must be a number".to_string()))?;

        Ok(NewState {
            name: text(&dto.name, "name")?,
            population,
            area,
            capital: text(&dto.capital, "capital")?,
            climate: text(&dto.climate, "climate")?,
        })
    }
}

/// Response DTO for a state record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateResponseDto {
    pub id: Uuid,
    pub name: String,
    pub population: i64,
    pub area: f64,
    pub capital: String,
    pub climate: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<State> for StateResponseDto {
    fn from(state: State) -> Self {
        Self {
            id: state.id,
            name: state.name,
            population: state.population,
            area: state.area,
            capital: state.capital,
            climate: state.climate,
            created_at: state.created_at,
            updated_at: state.updated_at,
        }
    }
}

/// Population of a single state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatePopulationDto {
    pub state: String,
    pub population: i64,
}

impl From<State> for StatePopulationDto {
    fn from(state: State) -> Self {
        Self {
            state: state.name,
            population: state.population,
        }
    }
}

/// Sum of population across every state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TotalPopulationDto {
    pub total_population: i64,
}

/// Population per square kilometre for one state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PopulationDensityDto {
    pub state: String,
    pub population_density: f64,
}

impl From<StateDensity> for PopulationDensityDto {
    fn from(density: StateDensity) -> Self {
        Self {
            state: density.state,
            population_density: density.population_density,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(value: Value) -> CreateStateDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parses_and_trims() {
        let dto = dto(json!({
            "name": "  Goa ",
            "population": "1458545",
            "area": 3702,
            "capital": "Panaji",
            "climate": "Tropical"
        }));

        let state = NewState::try_from(&dto).unwrap();
        assert_eq!(state.name, "Goa");
        assert_eq!(state.population, 1_458_545);
        assert_eq!(state.area, 3702.0);
    }

    #[test]
    fn test_missing_or_falsy_fields() {
        let base = json!({
            "name": "Goa",
            "population": 10,
            "area": 5,
            "capital": "Panaji",
            "climate": "Tropical"
        });

        for field in ["name", "population", "area", "capital", "climate"] {
            let mut without = base.clone();
            without.as_object_mut().unwrap().remove(field);
            assert!(matches!(
                NewState::try_from(&dto(without)),
                Err(AppError::MissingField)
            ));
        }

        let mut zero_population = base.clone();
        zero_population["population"] = json!(0);
        assert!(matches!(
            NewState::try_from(&dto(zero_population)),
            Err(AppError::MissingField)
        ));

        let mut blank_name = base;
        blank_name["name"] = json!("   ");
        assert!(matches!(
            NewState::try_from(&dto(blank_name)),
            Err(AppError::MissingField)
        ));
    }

    #[test]
    fn test_non_numeric_population_is_validation_error() {
        let dto = dto(json!({
            "name": "Goa",
            "population": "lots",
            "area": 5,
            "capital": "Panaji",
            "climate": "Tropical"
        }));
        assert!(matches!(
            NewState::try_from(&dto),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_bounds_use_the_coerced_number() {
        let with_population = |population: Value| {
            dto(json!({
                "name": "Goa",
                "population": population,
                "area": 5,
                "capital": "Panaji",
                "climate": "Tropical"
            }))
        };

        for population in [json!(1_500_000_000.5), json!(1e19), json!(2e30), json!("1500000001")] {
            assert!(matches!(
                with_population(population).check_bounds(),
                Err(AppError::OutOfRange(_))
            ));
        }

        assert!(with_population(json!(1_500_000_000)).check_bounds().is_ok());
        assert!(with_population(json!(10.5)).check_bounds().is_ok());
        assert!(with_population(json!("lots")).check_bounds().is_ok());
    }

    #[test]
    fn test_density_dto_serializes_camel_case() {
        let value = serde_json::to_value(PopulationDensityDto {
            state: "X".to_string(),
            population_density: 2.0,
        })
        .unwrap();
        assert_eq!(value, json!({ "state": "X", "populationDensity": 2.0 }));
    }
}
