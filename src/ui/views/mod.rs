pub mod loading;
pub mod quiz;
pub mod welcome;
