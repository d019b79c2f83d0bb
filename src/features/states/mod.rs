//! States: top-level administrative regions and their statistics.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/addState` | Create a state |
//! | GET | `/states/{name}/population` | Population of one state |
//! | GET | `/states/total-population` | Sum of all state populations |
//! | GET | `/states/average-density` | Population per km² for each state |
//! | GET | `/states` | List all states |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgStateRepository, StateRepository};
pub use services::StateService;
