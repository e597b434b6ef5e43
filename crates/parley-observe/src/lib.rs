//! Observability for Parley: tracing subscriber and OpenTelemetry setup.

pub mod tracing_setup;
