//! Shared vocabulary of the hexwatch workspace: what is monitored, how it is
//! classified and how the runtime is configured.

pub mod config;
pub mod error;
pub mod network;

#[doc(hidden)]
pub use tracing as __tracing;

/// Logs a positive outcome, rendered with its own marker by the terminal formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "hexwatch::success", $($arg)*)
    };
}
