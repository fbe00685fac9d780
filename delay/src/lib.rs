//! Blocking delay operations, independent of the runtime that calls them.
//!
//! Each operation validates its arguments, waits through a [`Sleeper`] and
//! then either reports a value or hands control to a continuation supplied by
//! the caller. Argument coercion and continuation invocation go through the
//! [`Host`] trait.

pub mod errors;
pub mod host;
pub mod listing;
pub mod ops;
pub mod sleeper;

pub use errors::{expect_arity, DelayError};
pub use host::Host;
pub use listing::{extension_of, list_by_extension, LIST_BY_EXTENSION_ARITY};
pub use ops::{delay, length, DELAY_ARITY, LENGTH_ARITY};
pub use sleeper::{millis_from_number, Sleeper, ThreadSleeper};
