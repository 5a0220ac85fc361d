//! Record processors

use slimlog_core::Record;

/// Transforms a record before handlers receive it
///
/// Any `Fn(Record) -> Record` closure is a processor:
///
/// ```ignore
/// logger.push_processor(Arc::new(|record: Record| {
///     record.with_extra("dummy", "Hello world!")
/// }));
/// ```
pub trait Processor: Send + Sync {
    fn process(&self, record: Record) -> Record;
}

impl<F> Processor for F
where
    F: Fn(Record) -> Record + Send + Sync,
{
    fn process(&self, record: Record) -> Record {
        self(record)
    }
}
