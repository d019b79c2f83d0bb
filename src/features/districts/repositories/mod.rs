mod district_repository;
mod pg_district_repository;

pub use district_repository::DistrictRepository;
pub use pg_district_repository::PgDistrictRepository;
