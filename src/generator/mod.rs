pub mod generator;
pub mod generator_model;
