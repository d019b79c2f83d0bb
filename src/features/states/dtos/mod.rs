mod state_dto;

pub use state_dto::{
    CreateStateDto, PopulationDensityDto, StatePopulationDto, StateResponseDto,
    TotalPopulationDto,
};
