//! File-backed OpenTelemetry span exporter.

use super::otlp;
use super::rotating::{RotatingWriter, RotationPolicy};
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope recorded on every exported batch.
pub const SCOPE: &str = "restloop";

/// Writes each exported batch as one OTLP JSON line through a
/// [`RotatingWriter`].
#[derive(Debug)]
pub struct FileSpanExporter {
    writer: RotatingWriter,
    resource: Resource,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    #[must_use]
    pub const fn new(path: PathBuf, policy: RotationPolicy, resource: Resource) -> Self {
        Self {
            writer: RotatingWriter::new(path, policy),
            resource,
            is_shutdown: AtomicBool::new(false),
        }
    }

    /// Synchronous body of [`SpanExporter::export`].
    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = otlp::encode_batch(&self.resource, SCOPE, batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        Box::pin(std::future::ready(self.write_batch(&batch)))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a tracer provider that exports every finished span straight to
/// `path`.
///
/// ```rust,no_run
/// use opentelemetry::KeyValue;
/// use opentelemetry_sdk::resource::Resource;
/// use restloop::observability::tracer_provider;
///
/// let resource = Resource::new(vec![KeyValue::new("service.name", "Restloop")]);
/// let provider = tracer_provider("/tmp/restloop-otlp.json".into(), resource);
/// # drop(provider);
/// ```
#[must_use]
pub fn tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(path, RotationPolicy::default(), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;
    use std::fs;

    fn exporter(path: PathBuf) -> FileSpanExporter {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Restloop")]);
        FileSpanExporter::new(path, RotationPolicy::default(), resource)
    }

    #[test]
    fn each_batch_is_one_json_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("restloop-otlp.json");
        let exporter = exporter(path.clone());

        exporter.write_batch(&[]).unwrap();
        exporter.write_batch(&[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let doc: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(doc["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], SCOPE);
    }

    #[test]
    fn refuses_batches_after_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("restloop-otlp.json");
        let mut exporter = exporter(path.clone());

        exporter.shutdown();

        assert!(exporter.write_batch(&[]).is_err());
        assert!(!path.exists());
    }
}
