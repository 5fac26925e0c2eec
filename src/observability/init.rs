//! Subscriber installation.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the plugin data directory.
pub const TRACE_FILE: &str = "restloop-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// Spans pass an [`EnvFilter`] built from `config.trace_level` (default
/// `"info"`) and are exported as OTLP JSON to [`TRACE_FILE`] under
/// [`data_dir`](crate::infrastructure::data_dir).
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without tracing. Only the first call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", "Restloop")]);
    let provider = exporter::tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("Restloop"));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
