use crate::report::{Finding, Severity};

/// The capability set a check run needs from its caller: an error sink and a
/// warning sink. Implementations receive fully formatted, human-readable
/// lines already prefixed with the base-relative path.
pub trait Logger {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Default logger: one line per message on stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Discards everything. Checks still run; only the notification is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentLogger;

impl Logger for SilentLogger {
    fn error(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}

/// Forward one finding to the logger with the standard path prefix.
///
/// Error findings go to the error sink, everything else to the warning sink.
pub fn forward_finding(logger: &dyn Logger, finding: &Finding) {
    let line = format!("{}: {}", finding.path.as_str(), finding.message);
    match finding.severity {
        Severity::Error => logger.error(&line),
        Severity::Warning | Severity::Info => logger.warn(&line),
    }
}
