//! Gallery lightbox placeholder. Clicks are only logged for now.

use tracing::info;

use crate::dom::Element;

pub struct Lightbox<E> {
    items: Vec<E>,
}

impl<E: Element> Lightbox<E> {
    pub fn new(items: Vec<E>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn on_item_click(&self, index: usize) {
        info!(index, "Gallery item clicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{ConsoleLayer, LogRecord, LogSink};
    use crate::testing::FakeElement;
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
    fn click_logs_one_diagnostic() {
        let sink = MemorySink::default();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone()));
        let lightbox = Lightbox::new(vec![FakeElement::new("div"), FakeElement::new("div")]);

        tracing::subscriber::with_default(subscriber, || lightbox.on_item_click(1));

        let records = sink.0.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "Gallery item clicked");
        assert_eq!(records[0].fields["index"], serde_json::Value::from(1));
        assert_eq!(lightbox.items().len(), 2);
    }
}
