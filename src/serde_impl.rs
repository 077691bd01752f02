//! Serde support for `Maybe`, `Outcome` and `Unit`.
//!
//! `Outcome` is written as a struct carrying both state flags and exactly
//! one payload:
//!
//! ```json
//! {"IsFailure":false,"IsSuccess":true,"Value":42}
//! {"IsFailure":true,"IsSuccess":false,"Error":"disk full"}
//! ```
//!
//! Reading it back rejects a missing flag, contradictory flags, a missing
//! payload, and a payload on the wrong side. Unknown fields are ignored.
//! `Maybe` is written exactly like `Option`, and `Unit` as a unit struct.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;

use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::unit::Unit;

const IS_FAILURE: &str = "IsFailure";
const IS_SUCCESS: &str = "IsSuccess";
const VALUE: &str = "Value";
const ERROR: &str = "Error";
const OUTCOME_FIELDS: &[&str] = &[IS_FAILURE, IS_SUCCESS, VALUE, ERROR];

// =============================================================================
// Outcome
// =============================================================================

impl<T, E> serde::Serialize for Outcome<T, E>
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Outcome", 3)?;
        state.serialize_field(IS_FAILURE, &self.is_failure())?;
        state.serialize_field(IS_SUCCESS, &self.is_success())?;
        match self {
            Self::Success(value) => state.serialize_field(VALUE, value)?,
            Self::Failure(error) => state.serialize_field(ERROR, error)?,
        }
        state.end()
    }
}

struct OutcomeVisitor<T, E> {
    marker: PhantomData<fn() -> Outcome<T, E>>,
}

impl<T, E> OutcomeVisitor<T, E> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

fn take_flag<'de, A>(access: &mut A, slot: &mut Option<bool>, name: &'static str) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    if slot.is_some() {
        return Err(de::Error::duplicate_field(name));
    }
    *slot = Some(access.next_value()?);
    Ok(())
}

impl<'de, T, E> Visitor<'de> for OutcomeVisitor<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    type Value = Outcome<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an outcome with IsFailure, IsSuccess and a Value or Error")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut is_failure: Option<bool> = None;
        let mut is_success: Option<bool> = None;
        let mut value: Option<T> = None;
        let mut error: Option<E> = None;

        while let Some(key) = access.next_key::<String>()? {
            match key.as_str() {
                IS_FAILURE => take_flag(&mut access, &mut is_failure, IS_FAILURE)?,
                IS_SUCCESS => take_flag(&mut access, &mut is_success, IS_SUCCESS)?,
                VALUE => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field(VALUE));
                    }
                    value = Some(access.next_value()?);
                }
                ERROR => {
                    if error.is_some() {
                        return Err(de::Error::duplicate_field(ERROR));
                    }
                    error = Some(access.next_value()?);
                }
                _ => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }

        let is_failure = is_failure.ok_or_else(|| de::Error::missing_field(IS_FAILURE))?;
        let is_success = is_success.ok_or_else(|| de::Error::missing_field(IS_SUCCESS))?;
        if is_failure == is_success {
            return Err(de::Error::custom(
                "IsFailure and IsSuccess must be opposite; an outcome is either a success or a failure",
            ));
        }

        if is_success {
            if error.is_some() {
                return Err(de::Error::custom("a successful outcome cannot carry an Error"));
            }
            value
                .map(Outcome::Success)
                .ok_or_else(|| de::Error::missing_field(VALUE))
        } else {
            if value.is_some() {
                return Err(de::Error::custom("a failed outcome cannot carry a Value"));
            }
            error
                .map(Outcome::Failure)
                .ok_or_else(|| de::Error::missing_field(ERROR))
        }
    }
}

impl<'de, T, E> serde::Deserialize<'de> for Outcome<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_struct("Outcome", OUTCOME_FIELDS, OutcomeVisitor::new())
    }
}

// =============================================================================
// Maybe
// =============================================================================

impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.as_option(), serializer)
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Unit
// =============================================================================

impl serde::Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_unit_struct("Unit")
    }
}

struct UnitVisitor;

impl Visitor<'_> for UnitVisitor {
    type Value = Unit;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a unit value")
    }

    fn visit_unit<X: de::Error>(self) -> Result<Unit, X> {
        Ok(Unit)
    }
}

impl<'de> serde::Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_unit_struct("Unit", UnitVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
