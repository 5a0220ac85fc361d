#![allow(non_snake_case)]

use super::*;
use parking_lot::Mutex;
use serde_json::json;
use slimlog_channel::{Handler, NullHandler, Processor, Record, StreamHandler, TestHandler};
use slimlog_core::{ChannelError, ChannelResult, LogLevel};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Handler that records its id into a shared call log
struct OrderedHandler {
    id: &'static str,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Handler for OrderedHandler {
    fn handle(&self, _record: &Record) -> ChannelResult<bool> {
        self.calls.lock().push(format!("handler:{}", self.id));
        Ok(false)
    }
}

/// Processor that records its id into a shared call log
struct OrderedProcessor {
    id: &'static str,
    calls: Arc<Mutex<Vec<String>>>,
}

impl Processor for OrderedProcessor {
    fn process(&self, record: Record) -> Record {
        self.calls.lock().push(format!("processor:{}", self.id));
        record
    }
}

struct FailingHandler;

impl Handler for FailingHandler {
    fn handle(&self, _record: &Record) -> ChannelResult<bool> {
        Err(ChannelError::handler("target is not writable"))
    }
}

fn capturing_writer() -> (ChannelWriter, Arc<TestHandler>) {
    let handler = Arc::new(TestHandler::new());
    let writer = ChannelWriter::new(WriterSettings::new().handler(handler.clone()));
    (writer, handler)
}

fn counting_factory(count: Arc<AtomicUsize>) -> impl Fn(&str) -> Logger + Send + Sync + 'static {
    move |name: &str| {
        count.fetch_add(1, Ordering::SeqCst);
        Logger::new(name)
    }
}

// Construction

#[test]
fn ChannelWriter___new___does_not_build_channel() {
    let (writer, _handler) = capturing_writer();

    assert!(!writer.is_initialized());
    assert!(writer.channel().is_none());
}

#[test]
fn ChannelWriter___new___merges_defaults() {
    let writer = ChannelWriter::new(WriterSettings::new());

    assert_eq!(writer.config().name(), Some("SlimMonoLogger"));
    assert_eq!(writer.config().handlers().map(<[_]>::len), Some(1));
    assert_eq!(writer.config().processors().map(<[_]>::len), Some(0));
}

#[test]
fn ChannelWriter___with_merge_false___uses_settings_verbatim() {
    let writer = ChannelWriter::with_merge(
        WriterSettings::new()
            .name("X")
            .handlers(Vec::new())
            .processors(Vec::new()),
        false,
    );

    assert_eq!(writer.config().name(), Some("X"));
    assert_eq!(writer.config().handlers().map(<[_]>::len), Some(0));
    assert_eq!(writer.config().processors().map(<[_]>::len), Some(0));
}

// Lazy channel

#[test]
fn ChannelWriter___write___builds_channel_with_configured_name() {
    let handler = Arc::new(TestHandler::new());
    let writer = ChannelWriter::new(WriterSettings::new().name("api").handler(handler.clone()));

    writer.write("hello", LogLevel::Info).unwrap();

    assert!(writer.is_initialized());
    assert_eq!(writer.channel().map(Logger::name), Some("api"));
    assert_eq!(handler.records()[0].channel, "api");
}

#[test]
fn ChannelWriter___write_twice___builds_one_channel() {
    let count = Arc::new(AtomicUsize::new(0));
    let (writer, handler) = capturing_writer();
    let writer = writer.with_factory(counting_factory(count.clone()));

    writer.write("first", LogLevel::Info).unwrap();
    writer.write("second", LogLevel::Debug).unwrap();

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(handler.records().len(), 2);
}

#[test]
fn ChannelWriter___concurrent_first_writes___build_one_channel() {
    let count = Arc::new(AtomicUsize::new(0));
    let (writer, handler) = capturing_writer();
    let writer = Arc::new(writer.with_factory(counting_factory(count.clone())));

    let threads: Vec<_> = (0..8)
        .map(|i| {
            let writer = writer.clone();
            std::thread::spawn(move || writer.write(format!("thread {}", i), LogLevel::Notice))
        })
        .collect();
    for thread in threads {
        thread.join().unwrap().unwrap();
    }

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(handler.records().len(), 8);
}

#[test]
fn ChannelWriter___write___registers_handlers_then_processors_in_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut settings = WriterSettings::new();
    for id in ["a", "b", "c"] {
        settings = settings.handler(Arc::new(OrderedHandler {
            id,
            calls: calls.clone(),
        }));
    }
    for id in ["x", "y"] {
        settings = settings.processor(Arc::new(OrderedProcessor {
            id,
            calls: calls.clone(),
        }));
    }
    let writer = ChannelWriter::new(settings);

    writer.write("ordered", LogLevel::Info).unwrap();

    assert_eq!(
        *calls.lock(),
        vec![
            "processor:x",
            "processor:y",
            "handler:a",
            "handler:b",
            "handler:c"
        ]
    );
}

#[test]
fn ChannelWriter___write___channel_holds_configured_handlers() {
    let first: Arc<dyn Handler> = Arc::new(NullHandler::new());
    let second: Arc<dyn Handler> = Arc::new(TestHandler::new());
    let writer = ChannelWriter::new(
        WriterSettings::new()
            .handler(first.clone())
            .handler(second.clone()),
    );

    writer.write("registered", LogLevel::Info).unwrap();

    let handlers = writer.channel().map(Logger::handlers).unwrap();
    assert_eq!(handlers.len(), 2);
    assert!(Arc::ptr_eq(&handlers[0], &first));
    assert!(Arc::ptr_eq(&handlers[1], &second));
}

#[test]
fn ChannelWriter___write___processors_enrich_record() {
    let handler = Arc::new(TestHandler::new());
    let writer = ChannelWriter::new(
        WriterSettings::new()
            .handler(handler.clone())
            .processor(Arc::new(|record: Record| {
                record.with_extra("dummy", "Hello world!")
            })),
    );

    writer.write("enriched", LogLevel::Info).unwrap();

    assert_eq!(handler.records()[0].extra["dummy"], json!("Hello world!"));
}

// Messages

#[test]
fn ChannelWriter___write___passes_structured_message_through() {
    let (writer, handler) = capturing_writer();

    writer
        .write(json!({"route": "/users", "status": 404}), LogLevel::Warn)
        .unwrap();

    let records = handler.records();
    let record = &records[0];
    assert_eq!(record.message, json!({"route": "/users", "status": 404}));
    assert_eq!(record.severity, Severity::Warning);
}

#[test]
fn ChannelWriter___write___accepts_raw_level_code() {
    let (writer, handler) = capturing_writer();

    writer.write(42, 1u8).unwrap();

    assert_eq!(handler.records()[0].severity, Severity::Emergency);
    assert_eq!(handler.records()[0].message, json!(42));
}

#[test]
fn ChannelWriter___write___to_stream_handler_appends_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("app.log");
    let writer = ChannelWriter::new(
        WriterSettings::new()
            .name("SlimMonoLogger")
            .handler(Arc::new(StreamHandler::new(&path))),
    );

    writer.write("Application started", LogLevel::Info).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(
        contents.contains("SlimMonoLogger.INFO: Application started"),
        "{}",
        contents
    );
}

// Failures

#[test]
fn ChannelWriter___write___handler_failure_propagates_unchanged() {
    let writer = ChannelWriter::new(WriterSettings::new().handler(Arc::new(FailingHandler)));

    let result = writer.write("lost", LogLevel::Error);

    match result {
        Err(WriterError::Channel(ChannelError::Handler(message))) => {
            assert_eq!(message, "target is not writable")
        }
        other => panic!("expected handler error, got {:?}", other),
    }
}

#[test]
fn ChannelWriter___write___handler_failure_displays_as_channel_error() {
    let writer = ChannelWriter::new(WriterSettings::new().handler(Arc::new(FailingHandler)));

    let err = writer.write("lost", LogLevel::Error).unwrap_err();

    assert_eq!(err.to_string(), "handler error: target is not writable");
}

#[test]
fn ChannelWriter___write___unopenable_stream_propagates_open_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file, not a directory").unwrap();
    let writer = ChannelWriter::new(
        WriterSettings::new().handler(Arc::new(StreamHandler::new(blocker.join("app.log")))),
    );

    let result = writer.write("lost", LogLevel::Critical);

    assert!(matches!(
        result,
        Err(WriterError::Channel(ChannelError::Open { .. }))
    ));
}

#[test]
fn ChannelWriter___verbatim_without_name___fails_on_first_write() {
    let writer = ChannelWriter::with_merge(
        WriterSettings::new()
            .handlers(Vec::new())
            .processors(Vec::new()),
        false,
    );

    let result = writer.write("unnamed", LogLevel::Info);

    assert!(matches!(result, Err(WriterError::MissingSetting("name"))));
    assert!(!writer.is_initialized());
}

#[test]
fn ChannelWriter___verbatim_without_handlers___fails_on_first_write() {
    let writer = ChannelWriter::with_merge(WriterSettings::new().name("X"), false);

    let result = writer.write("nowhere", LogLevel::Info);

    assert!(matches!(
        result,
        Err(WriterError::MissingSetting("handlers"))
    ));
}

#[test]
fn ChannelWriter___verbatim_with_empty_handlers___writes_nothing() {
    let writer = ChannelWriter::with_merge(
        WriterSettings::new()
            .name("X")
            .handlers(Vec::new())
            .processors(Vec::new()),
        false,
    );

    writer.write("dropped", LogLevel::Info).unwrap();

    assert!(writer.is_initialized());
}

#[test]
fn ChannelWriter___failed_build___retries_on_next_write() {
    let count = Arc::new(AtomicUsize::new(0));
    let writer = ChannelWriter::with_merge(WriterSettings::new().name("X"), false)
        .with_factory(counting_factory(count.clone()));

    assert!(writer.write("first", LogLevel::Info).is_err());
    assert!(writer.write("second", LogLevel::Info).is_err());

    assert!(!writer.is_initialized());
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn ChannelWriter___debug___shows_config_and_channel_state() {
    let (writer, _handler) = capturing_writer();

    let debug = format!("{:?}", writer);

    assert!(debug.contains("SlimMonoLogger"), "{}", debug);
    assert!(debug.contains("channel: None"), "{}", debug);
}
