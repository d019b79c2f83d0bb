pub mod auth;
pub mod districts;
pub mod states;
