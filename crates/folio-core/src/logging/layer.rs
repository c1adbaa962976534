//! Custom tracing Layer that forwards events to a [`LogSink`].

use std::fmt::Write as FmtWrite;

use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use super::record::LogRecord;

/// Destination for flattened log records.
pub trait LogSink: Send + Sync + 'static {
    fn emit(&self, record: &LogRecord);
}

/// A tracing Layer that flattens events into [`LogRecord`]s.
pub struct ConsoleLayer<S> {
    sink: S,
}

impl<S: LogSink> ConsoleLayer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl<S, R> Layer<R> for ConsoleLayer<S>
where
    S: LogSink,
    R: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, R>) {
        let metadata = event.metadata();

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut record = LogRecord::new(
            metadata.level().as_str().to_lowercase(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        record.fields = visitor.fields;

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                record.span = Some(spans.join(" > "));
            }
        }

        self.sink.emit(&record);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::Number(value.into()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::Number(value.into()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::Bool(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.insert(field, Value::Number(n));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::prelude::*;

    #[derive(Clone, Default)]
    struct MemorySink(Arc<Mutex<Vec<LogRecord>>>);

    impl LogSink for MemorySink {
        fn emit(&self, record: &LogRecord) {
            self.0.lock().unwrap().push(record.clone());
        }
    }

    #[test]
    fn test_console_layer_captures_events() {
        let sink = MemorySink::default();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Gallery item clicked");
            tracing::warn!(count = 42, ratio = 0.5, "Warning with field");
        });

        let records = sink.0.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, "info");
        assert_eq!(records[0].message, "Gallery item clicked");
        assert_eq!(records[1].level, "warn");
        assert_eq!(records[1].fields["count"], Value::from(42));
        assert_eq!(records[1].fields["ratio"], Value::from(0.5));
    }

    #[test]
    fn test_console_layer_records_span_path() {
        let sink = MemorySink::default();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            let outer = tracing::info_span!("mount");
            let _outer = outer.enter();
            let inner = tracing::info_span!("nav");
            let _inner = inner.enter();
            tracing::debug!("bound");
        });

        let records = sink.0.lock().unwrap();
        assert_eq!(records[0].span.as_deref(), Some("mount > nav"));
    }

    #[test]
    fn test_level_filter_drops_debug() {
        let sink = MemorySink::default();
        let subscriber = tracing_subscriber::registry()
            .with(tracing::level_filters::LevelFilter::INFO)
            .with(ConsoleLayer::new(sink.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::info!("shown");
        });

        let records = sink.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "shown");
    }
}
