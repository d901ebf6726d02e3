use crate::domain::{Error, ErrorReporter};

#[derive(Default, Debug)]
pub struct LogReporter {}

impl ErrorReporter for LogReporter {
    fn report(&self, step: &str, error: &Error) {
        tracing::warn!(step, error = %error, "operation failed");
    }
}
