//! Fail-fast reporting for programmer errors.
//!
//! Precondition violations (for example sampling from an empty range) are
//! bugs in the caller, not runtime conditions. They are reported once,
//! with the caller's source location, and then the process aborts. The
//! abort does not depend on the panic strategy of the final binary, so
//! `catch_unwind` cannot recover from it.
//!
//! Every public function that can end up here is `#[track_caller]`, which
//! makes [`Location::caller`] point at user code rather than at this crate.

use core::fmt;
use core::panic::Location;

/// Reports a fatal error at the caller's location and aborts the process.
///
/// The diagnostic goes to the `tracing` subscriber (if one is installed)
/// and unconditionally to stderr, since an abort leaves no later chance
/// to flush a logger.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn report(args: fmt::Arguments<'_>) -> ! {
    let location = Location::caller();

    tracing::error!(
        file = location.file(),
        line = location.line(),
        "fatal: {args}"
    );

    eprintln!("fatal error at {location}: {args}");

    std::process::abort();
}

/// `format!`-style front end for [`report`].
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::fatal::report(format_args!($($arg)*))
    };
}

pub(crate) use fatal;
