//! # Validator Values and the Validation Context
//!
//! Defines [`Validator`], the shareable check a model attribute slot can
//! carry, and [`ValidationContext`], the read-only description of which
//! attribute of which entity kind is being validated.
//!
//! ## Sharing Model
//!
//! A `Validator` wraps its check in an `Arc`, so cloning one produces a
//! second handle to the *same* check. Two attribute slots that should share
//! one validator definition hold clones of a single `Validator` — an
//! explicit reference established at construction time, rather than a
//! runtime lookup through the owning instance.
//!
//! ## Purity
//!
//! A validator is a deterministic function of `(context, payload)` with no
//! observable side effect beyond its returned error. Validators are
//! `Send + Sync`; independent threads may invoke any number of them
//! concurrently without coordination.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use coalaip_core::{ModelDataError, ModelError, Payload};

/// Identifies the attribute under validation and the entity kind that owns
/// it. Used only for constructing error messages; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext<'a> {
    /// Name of the entity kind whose attribute is being set (e.g. "Work").
    pub entity_kind: &'a str,
    /// Name of the attribute being set (e.g. "data").
    pub attribute: &'a str,
}

impl<'a> ValidationContext<'a> {
    /// Create a context for one attribute of one entity kind.
    pub fn new(entity_kind: &'a str, attribute: &'a str) -> Self {
        Self {
            entity_kind,
            attribute,
        }
    }
}

type ValidateFn =
    dyn Fn(&ValidationContext<'_>, &Payload) -> Result<(), ModelDataError> + Send + Sync;

/// A payload check attachable to a model attribute slot.
///
/// Either returns silently (payload accepted) or fails with a
/// [`ModelDataError`] describing the violated rule. Cloning is cheap and
/// shares the underlying check.
#[derive(Clone)]
pub struct Validator(Arc<ValidateFn>);

impl Validator {
    /// Wrap a check function as a validator.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&ValidationContext<'_>, &Payload) -> Result<(), ModelDataError>
            + Send
            + Sync
            + 'static,
    {
        Self(Arc::new(check))
    }

    /// Run the check against a candidate payload.
    ///
    /// # Errors
    ///
    /// Returns the check's [`ModelDataError`] when the payload violates the
    /// structural rules this validator encodes.
    pub fn validate(
        &self,
        ctx: &ValidationContext<'_>,
        data: &Payload,
    ) -> Result<(), ModelDataError> {
        (self.0)(ctx, data)
    }

    /// Whether two validator handles share one underlying check.
    ///
    /// Holds for clones of the same `Validator`; used to assert that two
    /// attribute slots really do share a definition.
    pub fn shares_check_with(&self, other: &Validator) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Validator").finish()
    }
}

// ─── Attribute Values ────────────────────────────────────────────────

/// A candidate value for a model attribute slot.
///
/// Slots are untyped at the assignment boundary: a slot may receive a data
/// payload, a validator, or any other JSON value. Which of these a given
/// slot accepts is decided by the check registered on it.
#[derive(Debug, Clone)]
pub enum AttributeValue {
    /// An entity data payload.
    Data(Payload),
    /// A payload validator.
    Validator(Validator),
    /// Any other JSON value.
    Json(Value),
}

impl AttributeValue {
    /// A short name for the runtime kind of this value, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Data(_) => "payload",
            Self::Validator(_) => "validator",
            Self::Json(Value::Null) => "null",
            Self::Json(Value::Bool(_)) => "boolean",
            Self::Json(Value::Number(_)) => "number",
            Self::Json(Value::String(_)) => "string",
            Self::Json(Value::Array(_)) => "array",
            Self::Json(Value::Object(_)) => "object",
        }
    }

    /// The validator held by this value, if it is one.
    pub fn as_validator(&self) -> Option<&Validator> {
        match self {
            Self::Validator(v) => Some(v),
            _ => None,
        }
    }

    /// Extract the validator this value holds.
    ///
    /// The owning form of the invocability check: the same rejection as
    /// [`is_callable`], yielding the validator itself on success so callers
    /// can store it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotCallable`] for any non-validator value.
    pub fn into_validator(self, ctx: &ValidationContext<'_>) -> Result<Validator, ModelError> {
        match self {
            Self::Validator(v) => Ok(v),
            other => Err(not_callable(ctx, other.kind_name())),
        }
    }
}

/// The type-mismatch rejection shared by every invocability path.
fn not_callable(ctx: &ValidationContext<'_>, given: &'static str) -> ModelError {
    ModelError::NotCallable {
        attribute: ctx.attribute.to_string(),
        entity_kind: ctx.entity_kind.to_string(),
        given,
    }
}

/// Invocability check: the value must be something that can be invoked as
/// a validator.
///
/// Accepts only [`AttributeValue::Validator`]; anything else — payloads,
/// numbers, strings — fails with the type-mismatch error
/// [`ModelError::NotCallable`] naming the attribute.
///
/// # Errors
///
/// Returns `ModelError::NotCallable` for any non-validator value.
pub fn is_callable(
    ctx: &ValidationContext<'_>,
    value: &AttributeValue,
) -> Result<(), ModelError> {
    if value.as_validator().is_some() {
        Ok(())
    } else {
        Err(not_callable(ctx, value.kind_name()))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
