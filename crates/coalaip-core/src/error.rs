//! # Error Types — Structured Validation Errors
//!
//! Defines the error hierarchy for entity model validation. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every rejection names the attribute under validation, the entity kind
//!   that owns it, and (where one exists) the offending value, so messages
//!   can be shown to the integrating developer as-is.
//! - Two error kinds exist: [`ModelDataError`] for structural/semantic rule
//!   violations on a payload, and the type-mismatch / attribute-resolution
//!   variants of [`ModelError`] raised by the attribute layer itself.
//! - Validators never catch or recover; a failure surfaces synchronously to
//!   the caller, which aborts the entity construction in progress.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Top-level error type for entity model operations.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A payload violated the structural rules of its entity kind.
    #[error(transparent)]
    Data(#[from] ModelDataError),

    /// An attribute slot that must hold a validator received something else.
    ///
    /// This is the type-mismatch error of the invocability check; it is the
    /// only failure that is not a model-data error.
    #[error("'{attribute}' of a '{entity_kind}' must be callable; given a {given} value")]
    NotCallable {
        /// The attribute being assigned.
        attribute: String,
        /// The entity kind that owns the attribute.
        entity_kind: String,
        /// Runtime kind of the rejected value.
        given: &'static str,
    },

    /// An attribute was referenced that has no validator registered.
    ///
    /// Raised when sharing a sibling slot's validator before the sibling
    /// has been registered, or when validating through an unregistered slot.
    #[error("no validator registered on attribute '{attribute}' of a '{entity_kind}'")]
    UnknownAttribute {
        /// The attribute that could not be resolved.
        attribute: String,
        /// The entity kind that owns the attribute.
        entity_kind: String,
    },
}

/// A structural or semantic rule violation on an entity payload.
///
/// Each variant carries the offending field, the attribute under
/// validation, and the owning entity kind as structured data; the derived
/// message interpolates all of them.
#[derive(Error, Debug)]
pub enum ModelDataError {
    /// A required field is missing or holds a non-string value.
    ///
    /// `given` records the offending value; an absent field is recorded as
    /// `Value::Null`. Only a JSON string satisfies the check — numbers,
    /// booleans and `null` are rejected even when convertible to text.
    #[error("'{field}' must be given as a string in the '{attribute}' parameter of a '{entity_kind}'; given {given}")]
    ExpectedString {
        /// The field that failed the check.
        field: String,
        /// The attribute being validated.
        attribute: String,
        /// The entity kind that owns the attribute.
        entity_kind: String,
        /// The offending value (`Value::Null` when the field was absent).
        given: Value,
    },

    /// A field that the entity kind forbids outright was present.
    #[error("'{key}' must not be given in the '{attribute}' parameter of a '{entity_kind}'")]
    KeyMustBeAbsent {
        /// The forbidden field.
        key: String,
        /// The attribute being validated.
        attribute: String,
        /// The entity kind that owns the attribute.
        entity_kind: String,
    },

    /// The payload contained keys from a forbidden key set.
    ///
    /// Raised by the forbidden-keys combinator before the wrapped validator
    /// runs, listing how many and which forbidden keys were found.
    #[error("{found} forbidden keys ({matched}) given in the '{attribute}' parameter of a '{entity_kind}'; keys ({forbidden}) must not appear")]
    ForbiddenKeys {
        /// How many forbidden keys were present.
        found: usize,
        /// The forbidden keys that were present.
        matched: KeySet,
        /// The full forbidden key set.
        forbidden: KeySet,
        /// The attribute being validated.
        attribute: String,
        /// The entity kind that owns the attribute.
        entity_kind: String,
    },

    /// A discriminant boolean was present with the wrong value.
    ///
    /// Strict identity: only the exact JSON boolean satisfies the check.
    /// Truthy/falsy stand-ins such as `1`, `0` or `"true"` are rejected.
    #[error("'{flag}' must be {expected} if given in the '{attribute}' parameter of a '{entity_kind}'; given {given}")]
    FlagMismatch {
        /// The discriminant field.
        flag: String,
        /// The exact boolean the entity kind requires.
        expected: bool,
        /// The offending value.
        given: Value,
        /// The attribute being validated.
        attribute: String,
        /// The entity kind that owns the attribute.
        entity_kind: String,
    },
}

/// An ordered list of field names, rendered comma-separated in messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet(Vec<String>);

impl KeySet {
    /// The field names in this set.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of field names in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{name}'")?;
        }
        Ok(())
    }
}

impl From<Vec<String>> for KeySet {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl<const N: usize> From<[&str; N]> for KeySet {
    fn from(names: [&str; N]) -> Self {
        Self(names.iter().map(|s| s.to_string()).collect())
    }
}

impl FromIterator<String> for KeySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
