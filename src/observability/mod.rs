//! Tracing export to a local OTLP JSON file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → FileSpanExporter → RotatingWriter
//! ```
//!
//! The plugin sandbox has no collector to talk to, so finished spans are
//! written one batch per line to `restloop-otlp.json` in the plugin data
//! directory. The file rotates at 10 MiB and keeps three backups.
//!
//! - [`init`]: subscriber installation
//! - [`exporter`]: `SpanExporter` implementation and tracer provider
//! - [`otlp`]: OTLP JSON encoding
//! - [`rotating`]: size-rotating line writer

pub mod exporter;
pub mod init;
pub mod otlp;
pub mod rotating;

pub use exporter::{tracer_provider, FileSpanExporter};
pub use init::init_tracing;
pub use rotating::{RotatingWriter, RotationPolicy};
