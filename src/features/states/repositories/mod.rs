mod pg_state_repository;
mod state_repository;

pub use pg_state_repository::PgStateRepository;
pub use state_repository::StateRepository;
