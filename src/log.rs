//! Conditional logging macros.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it
//! they expand to nothing.
//!
//! Events emitted by the crate:
//! - `debug!` when an arrow is routed, with its anchors and which ends are bound
//! - `debug!` when a binding names no scene, a missing element or a deleted one
//! - `debug!` when the kernel hits its step cap or gives up short of the target
//! - `warn!` when a bound element's family has no four-segment estimate

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
