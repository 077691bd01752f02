//! The information-free `Unit` marker.
//!
//! `Unit` stands in for "no meaningful payload", most often as the success
//! type of an [`Outcome`](crate::Outcome) that only reports whether an
//! operation worked.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::{Outcome, Unit};
//!
//! let saved: Outcome<Unit> = Outcome::success(Unit::VALUE);
//! assert_eq!(saved.to_string(), "Success(())");
//! assert_eq!(Unit::VALUE, Unit::default());
//! ```

use std::fmt;

use static_assertions::{assert_eq_size, assert_impl_all};

/// A singleton value carrying no information.
///
/// All `Unit` values are equal and hash identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unit;

assert_eq_size!(Unit, ());
assert_impl_all!(Unit: Send, Sync, Copy, std::hash::Hash);

impl Unit {
    /// The only `Unit` value.
    pub const VALUE: Self = Self;
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
