/// Sink for field-level validation failures.
///
/// The validator only ever adds to a collector; it never removes or inspects
/// individual entries, so callers can plug in whatever aggregation they use.
pub trait ErrorCollector {
    fn add(&mut self, field: &'static str, message: &'static str);
    fn is_empty(&self) -> bool;
}

pub type ErrorCollectorBox = Box<dyn ErrorCollector + Send>;

impl<C: ErrorCollector + ?Sized> ErrorCollector for Box<C> {
    fn add(&mut self, field: &'static str, message: &'static str) {
        (**self).add(field, message);
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}
