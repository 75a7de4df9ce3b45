pub mod sample_trait;
pub mod telemetry;
