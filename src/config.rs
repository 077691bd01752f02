//! Process-wide settings.
//!
//! The settings only affect presentation helpers: the separator used when
//! several error messages are rendered as one, and the projection from a
//! captured [`Fault`] to an error message used by `Outcome::attempt_default`.
//! No `Maybe`/`Outcome` invariant depends on them.
//!
//! Settings are meant to be written once at startup and read afterwards.
//!
//! # Examples
//!
//! ```rust
//! use lambars_outcome::config;
//!
//! assert_eq!(config::error_messages_separator(), ", ");
//! ```

use std::borrow::Cow;

use parking_lot::RwLock;

use crate::error::Fault;

/// Projection from a captured fault to an error message.
pub type FaultHandler = fn(&Fault) -> String;

/// Separator placed between messages by default.
pub const DEFAULT_ERROR_MESSAGES_SEPARATOR: &str = ", ";

struct Settings {
    error_messages_separator: Cow<'static, str>,
    fault_handler: FaultHandler,
}

impl Settings {
    const DEFAULT: Self = Self {
        error_messages_separator: Cow::Borrowed(DEFAULT_ERROR_MESSAGES_SEPARATOR),
        fault_handler: fault_message,
    };
}

static SETTINGS: RwLock<Settings> = parking_lot::const_rwlock(Settings::DEFAULT);

fn fault_message(fault: &Fault) -> String {
    fault.message().to_string()
}

/// Returns the separator used to join several error messages.
pub fn error_messages_separator() -> String {
    SETTINGS.read().error_messages_separator.to_string()
}

/// Replaces the separator used to join several error messages.
pub fn set_error_messages_separator(separator: impl Into<Cow<'static, str>>) {
    SETTINGS.write().error_messages_separator = separator.into();
}

/// Projects `fault` to an error message with the configured handler.
///
/// The default handler returns the fault message unchanged.
pub fn default_fault_message(fault: &Fault) -> String {
    let handler = SETTINGS.read().fault_handler;
    handler(fault)
}

/// Replaces the handler used by [`default_fault_message`].
pub fn set_default_fault_handler(handler: FaultHandler) {
    SETTINGS.write().fault_handler = handler;
}

/// Restores every setting to its default.
pub fn reset() {
    *SETTINGS.write() = Settings::DEFAULT;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use parking_lot::Mutex;
    use rstest::rstest;

    /// Serializes unit tests that touch or depend on the global settings.
    pub static SETTINGS_GUARD: Mutex<()> = parking_lot::const_mutex(());

    #[rstest]
    fn separator_defaults_to_comma() {
        let _guard = SETTINGS_GUARD.lock();
        reset();
        assert_eq!(error_messages_separator(), DEFAULT_ERROR_MESSAGES_SEPARATOR);
    }

    #[rstest]
    fn separator_can_be_replaced_and_reset() {
        let _guard = SETTINGS_GUARD.lock();
        set_error_messages_separator("; ");
        assert_eq!(error_messages_separator(), "; ");
        set_error_messages_separator(String::from(" | "));
        assert_eq!(error_messages_separator(), " | ");
        reset();
        assert_eq!(error_messages_separator(), ", ");
    }

    #[rstest]
    fn fault_handler_can_be_replaced() {
        let _guard = SETTINGS_GUARD.lock();
        let fault = Fault::new("boom");
        assert_eq!(default_fault_message(&fault), "boom");

        set_default_fault_handler(|fault| format!("unexpected: {}", fault.message()));
        assert_eq!(default_fault_message(&fault), "unexpected: boom");
        reset();
        assert_eq!(default_fault_message(&fault), "boom");
    }
}
