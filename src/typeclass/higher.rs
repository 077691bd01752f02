//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Outcome<_, E>` as type
//! constructors directly. [`TypeConstructor`] works around this with a GAT
//! so that `Functor`, `Applicative` and `Monad` can be written once.
//!
//! # Example
//!
//! ```rust
//! use lambars_outcome::typeclass::TypeConstructor;
//! use lambars_outcome::Maybe;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Maybe<String> = reset(Maybe::just(42));
//! assert_eq!(emptied, Maybe::Nothing);
//! ```

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}
