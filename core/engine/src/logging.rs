//! FILENAME: core/engine/src/logging.rs
// PURPOSE: Category-tagged logging macro on top of the `log` facade.
// CONTEXT: The category string becomes the log target, so a logger can
// filter e.g. `TOTALS` or `CUMULATIVE` on its own. The library never
// installs a logger; that is left to the binary or test.

#[doc(hidden)]
pub use log as __log;

#[macro_export]
macro_rules! log_debug {
    ($cat:expr, $($arg:tt)*) => {
        $crate::logging::__log::debug!(target: $cat, $($arg)*)
    };
}

