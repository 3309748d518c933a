use oe_depends::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Recorded {
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

/// Mock DiagnosticsReporter recording everything reported to it.
///
/// Clones share the same recording, so a clone can be handed to the use
/// case while the test keeps one to inspect afterwards.
#[derive(Debug, Clone, Default)]
pub struct MockDiagnosticsReporter {
    inner: Rc<RefCell<Recorded>>,
}

impl MockDiagnosticsReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.inner.borrow().messages.clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.inner.borrow().warnings.clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.inner.borrow().errors.clone()
    }
}

impl DiagnosticsReporter for MockDiagnosticsReporter {
    fn report(&self, message: &str) {
        self.inner.borrow_mut().messages.push(message.to_string());
    }

    fn report_warning(&self, message: &str) {
        self.inner.borrow_mut().warnings.push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.inner.borrow_mut().errors.push(message.to_string());
    }
}
