/// Largest population accepted for a single state
pub const MAX_STATE_POPULATION: i64 = 1_500_000_000;

/// Largest area (square km) accepted for a single state
pub const MAX_STATE_AREA: f64 = 3_300_000.0;

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub const MSG_MISSING_STATE_FIELDS: &str =
    "All fields (name, population, area, capital, climate) are required";

pub const MSG_DUPLICATE_STATE: &str = "State with the same name already exists!";

pub const MSG_INVALID_POPULATION_OR_AREA: &str = "Invalid population or area size.";

pub const MSG_INVALID_STATE_REFERENCE: &str = "State ID is invalid or does not exist.";

pub const MSG_INVALID_DISTRICT_UPDATE: &str =
    "Valid district name and positive population number are required.";
