//! Districts: sub-regions that reference exactly one state.
//!
//! The `state_id` reference is checked when a district is created and never
//! again. Joins against `states` use inner-join semantics, so districts whose
//! state no longer resolves drop out of the grouped and joined views.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/addDistrict` | Create a district |
//! | PUT | `/districts/{name}/population` | Update a district's population |
//! | DELETE | `/districts/{name}` | Delete a district |
//! | GET | `/districts/group-by-state` | District population summed per state |
//! | GET | `/districts/with-states` | Districts joined with state details |
//! | GET | `/districts` | List districts with their state's name |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{DistrictRepository, PgDistrictRepository};
pub use services::DistrictService;
