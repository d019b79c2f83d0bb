mod district;

pub use district::{
    District, DistrictStateDetails, DistrictWithState, NewDistrict, StatePopulationTotal,
};
