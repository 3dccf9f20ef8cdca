//! Observability setup for AcolheIA: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
