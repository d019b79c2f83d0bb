mod state;

pub use state::{NewState, State, StateDensity};
