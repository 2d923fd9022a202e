use core::fmt;

/// A recoverable misuse, reported and then worked around.
///
/// The rendered text always starts with `[Container] op(): ` so the offending
/// call can be found in logs.
#[derive(Debug, Clone, Copy)]
pub enum Diagnostic<'a> {
    /// An index at or past the end of the backing store was clamped.
    OutOfBounds {
        container: &'static str,
        op: &'static str,
        idx: usize,
    },
    /// An insertion was dropped because the container had no free slot.
    CapacityFull {
        container: &'static str,
        op: &'static str,
        value: &'a dyn fmt::Debug,
    },
    /// A removal was ignored because the container held nothing.
    Empty {
        container: &'static str,
        op: &'static str,
    },
}

impl Diagnostic<'_> {
    pub fn container(&self) -> &'static str {
        match self {
            Diagnostic::OutOfBounds { container, .. }
            | Diagnostic::CapacityFull { container, .. }
            | Diagnostic::Empty { container, .. } => container,
        }
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::OutOfBounds { container, op, idx } => {
                write!(f, "[{container}] {op}(): Out of bounds access at idx: {idx}")
            }
            Diagnostic::CapacityFull {
                container,
                op,
                value,
            } => write!(
                f,
                "[{container}] {op}(): Capacity full, not inserting element: {value:?}"
            ),
            Diagnostic::Empty { container, op } => {
                write!(f, "[{container}] {op}(): {container} is empty")
            }
        }
    }
}

/// Emits a soft diagnostic on the `kioku::diag` target at WARN level.
#[cold]
pub fn report(diagnostic: Diagnostic<'_>) {
    tracing::warn!(
        target: "kioku::diag",
        container = diagnostic.container(),
        "{diagnostic}"
    );
}
