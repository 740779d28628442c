pub mod example_source;
pub mod mode;
