use crate::Chronometer;
use std::fmt::Display;

/// Prints lines to stderr, tagged with a scope and the time elapsed since the logger was created.
#[derive(Clone, Copy)]
pub struct Logger {
    scope: &'static str,
    chronometer: Chronometer,
}

impl Logger {
    pub fn new(scope: &'static str) -> Self {
        Self {
            scope,
            chronometer: Chronometer::new(),
        }
    }

    /// Shares the clock of `self` under another scope.
    pub fn scoped(&self, scope: &'static str) -> Self {
        Self { scope, ..*self }
    }

    pub fn line(&self, value: impl Display) -> String {
        format!("[{}] {} ({} elapsed)", self.scope, value, self.chronometer.elapsed())
    }

    pub fn log(&self, value: impl Display) {
        eprintln!("{}", self.line(value));
    }
}
