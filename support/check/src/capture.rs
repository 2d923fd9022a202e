//! Test helpers for observing diagnostics.
//!
//! Enabled by the `capture` feature; crates pull it in through their
//! dev-dependencies only.

use std::io;
use std::string::String;
use std::sync::{Arc, Mutex, PoisonError};
use std::vec::Vec;

use tracing_subscriber::{EnvFilter, fmt};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a thread-local subscriber and returns its result together
/// with everything logged meanwhile.
///
/// # Example
///
/// ```
/// use kioku_check::{Diagnostic, capture::capture_diagnostics, report};
///
/// let ((), logs) = capture_diagnostics(|| {
///     report(Diagnostic::Empty { container: "Stack", op: "pop" });
/// });
/// assert!(logs.contains("[Stack] pop(): Stack is empty"));
/// ```
pub fn capture_diagnostics<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

/// Initialize a global subscriber for tests, honoring `RUST_LOG`.
///
/// Call this at the start of tests where you want to see logging output.
/// Later calls are ignored.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
