pub mod config;
pub mod result;
pub mod sample_structure;
pub mod samples;
pub mod test_fixture;
pub mod validations;
