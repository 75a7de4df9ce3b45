use crate::result::error::{Result, SampleError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

/// Installs the process-wide subscriber: bunyan JSON lines on stdout, `log` records (rusoto,
/// hyper) bridged into tracing, everything above `level` dropped.
///
/// Events are flushed by a background writer for as long as the returned guard is alive.
pub fn init_tracing(level: LevelFilter) -> Result<WorkerGuard> {
    LogTracer::init().map_err(|e| SampleError::Telemetry(e.to_string()))?;

    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking_writer);

    tracing_subscriber::registry()
        .with(level)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()
        .map_err(|e| SampleError::Telemetry(e.to_string()))?;

    Ok(guard)
}
