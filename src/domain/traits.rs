use crate::domain::Error;

/// Sink for failed operations that the caller chose not to escalate.
pub trait ErrorReporter {
    fn report(&self, step: &str, error: &Error);
}
