//! Derive macros for lambars-outcome.
//!
//! # Available Derive Macros
//!
//! - [`Semigroup`]: Field-wise `combine` for structs whose fields are all
//!   semigroups, typically used as the error type of aggregated outcomes.
//!
//! # Example
//!
//! ```rust,ignore
//! use lambars_outcome::typeclass::Semigroup;
//! use lambars_outcome::{Outcome, Semigroup};
//!
//! #[derive(Debug, PartialEq, Semigroup)]
//! struct Violations {
//!     fields: Vec<&'static str>,
//!     summary: String,
//! }
//!
//! let results: Vec<Outcome<(), Violations>> = vec![
//!     Outcome::failure(Violations { fields: vec!["name"], summary: "name; ".into() }),
//!     Outcome::failure(Violations { fields: vec!["age"], summary: "age".into() }),
//! ];
//! let combined = Outcome::combine_errors(results);
//! assert_eq!(combined.error().fields, vec!["name", "age"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod semigroup;

use proc_macro::TokenStream;

/// Derive macro implementing `lambars_outcome::typeclass::Semigroup`.
///
/// `combine` merges two values field by field, in declaration order, with
/// each field's own `Semigroup::combine`. Every field type must implement
/// `Semigroup`; the generated impl carries one bound per field type.
///
/// # Requirements
///
/// - Named or tuple struct with at least one field
/// - Enums, unions and unit structs are rejected with a compile error
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Semigroup for Report {
///     fn combine(self, other: Self) -> Self {
///         Self {
///             errors: Semigroup::combine(self.errors, other.errors),
///             summary: Semigroup::combine(self.summary, other.summary),
///         }
///     }
/// }
/// ```
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    semigroup::derive_semigroup_impl(input)
}
