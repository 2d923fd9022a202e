use core::panic::Location;

/// Reports a failed precondition and panics.
///
/// Called by [`kioku_assert!`](crate::kioku_assert); the location is the
/// outermost `#[track_caller]` frame, so public entry points that forward
/// tracking blame their own caller.
#[cold]
#[inline(never)]
#[track_caller]
pub fn precondition_failed(expression: &str) -> ! {
    let location = Location::caller();
    tracing::error!(
        target: "kioku::fatal",
        file = location.file(),
        line = location.line(),
        "Assertion failed: {expression}"
    );
    panic!(
        "precondition violated at {}:{}: {}",
        location.file(),
        location.line(),
        expression
    )
}
