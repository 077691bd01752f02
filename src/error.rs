//! Error types shared by `Maybe` and `Outcome`.
//!
//! Two error universes are kept apart:
//!
//! - [`ContractViolation`]: a programming error such as reading the value of
//!   a `Nothing` or the error of a `Success`. These are raised as panics at
//!   the call site and never recovered internally.
//! - Domain failures: the `E` payload of an [`Outcome`](crate::Outcome). The
//!   library never inspects or raises them.
//!
//! [`Fault`] is the bridge between the two: `Outcome::attempt` captures a
//! panic as a `Fault` and hands it to the caller's handler.

use std::any::Any;
use std::fmt;

use crate::config;
use crate::typeclass::Semigroup;

/// A programming error detected by an accessor or conversion.
///
/// Panicking accessors raise these through their `Display` message, so
/// `#[should_panic(expected = ...)]` tests can match on the text.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::error::ContractViolation;
///
/// let violation = ContractViolation::ErrorOfSuccess;
/// assert!(violation.to_string().contains("successful outcome has no Error"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    /// The value of a `Nothing` was requested.
    #[error("Maybe has no value.")]
    NoValue,
    /// The value of a `Failure` was requested.
    #[error(
        "You attempted to access the Value for a failed outcome. A failed outcome has no Value. The error was: {error}"
    )]
    ValueOfFailure {
        /// Display rendering of the failure's error.
        error: String,
    },
    /// The error of a `Success` was requested.
    #[error(
        "You attempted to access the Error for a successful outcome. A successful outcome has no Error."
    )]
    ErrorOfSuccess,
    /// `convert_failure` was called on a `Success`.
    #[error("convert_failure failed because the Outcome is in a success state.")]
    ConvertFailureOfSuccess,
}

impl ContractViolation {
    /// Raises this violation as a panic at the caller's location.
    ///
    /// # Panics
    ///
    /// Always panics with the violation's message.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}

/// A panic captured by `Outcome::attempt`.
///
/// The message is taken from the panic payload when it is a `&str` or a
/// `String`, which covers every `panic!` with a format string.
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::error::Fault;
///
/// let fault = Fault::new("boom");
/// assert_eq!(fault.message(), "boom");
/// assert_eq!(fault.to_string(), "boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Message used when a panic payload is neither `&str` nor `String`.
    pub const UNKNOWN_PAYLOAD: &'static str = "unknown panic payload";

    /// Creates a fault carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds a fault from the payload returned by `std::panic::catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload.downcast_ref::<&'static str>().map_or_else(
                || Self::UNKNOWN_PAYLOAD.to_string(),
                |message| (*message).to_string(),
            ),
        };
        Self { message }
    }

    /// Returns the fault message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the fault and returns its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// An ordered list of error messages that merges by concatenation.
///
/// Useful as the error type of outcomes that are aggregated with
/// `Outcome::combine_errors`. Displays as the messages joined by the
/// configured separator (see [`config::error_messages_separator`]).
///
/// # Examples
///
/// ```rust
/// use lambars_outcome::error::ErrorList;
/// use lambars_outcome::typeclass::Semigroup;
///
/// let errors = ErrorList::single("name is empty").combine(ErrorList::single("age is negative"));
/// assert_eq!(errors.messages(), ["name is empty", "age is negative"]);
/// assert_eq!(errors.to_string(), "name is empty, age is negative");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorList {
    messages: Vec<String>,
}

impl ErrorList {
    /// Creates a list holding one message.
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// Returns the messages in insertion order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the number of messages.
    pub const fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the list holds no message.
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ErrorList {
    fn from_iter<I: IntoIterator<Item = S>>(iterator: I) -> Self {
        Self {
            messages: iterator.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for ErrorList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl Semigroup for ErrorList {
    fn combine(mut self, other: Self) -> Self {
        self.messages.extend(other.messages);
        self
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.messages.join(&config::error_messages_separator()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fault_from_str_payload() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(Fault::from_panic(payload).message(), "boom");
    }

    #[rstest]
    fn fault_from_formatted_payload() {
        let code = 7;
        let payload = std::panic::catch_unwind(|| panic!("failed with {code}")).unwrap_err();
        assert_eq!(Fault::from_panic(payload).message(), "failed with 7");
    }

    #[rstest]
    fn fault_from_foreign_payload() {
        let payload = std::panic::catch_unwind(|| std::panic::panic_any(42_u8)).unwrap_err();
        assert_eq!(Fault::from_panic(payload).message(), Fault::UNKNOWN_PAYLOAD);
    }

    #[rstest]
    #[should_panic(expected = "Maybe has no value.")]
    fn raise_panics_with_display_message() {
        ContractViolation::NoValue.raise();
    }

    #[rstest]
    fn value_of_failure_message_includes_error() {
        let violation = ContractViolation::ValueOfFailure {
            error: "disk full".to_string(),
        };
        assert!(violation.to_string().ends_with("The error was: disk full"));
    }

    #[rstest]
    fn error_list_combine_preserves_order() {
        let combined = ErrorList::single("a")
            .combine(ErrorList::single("b"))
            .combine(["c", "d"].into_iter().collect());
        assert_eq!(combined.messages(), ["a", "b", "c", "d"]);
        assert_eq!(combined.len(), 4);
    }

    #[rstest]
    fn error_list_default_is_empty() {
        assert!(ErrorList::default().is_empty());
    }
}
