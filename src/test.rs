mod colour_mapper_tests;
mod logging_tests;

pub mod utils;
