pub mod constants;
pub mod mocks;
