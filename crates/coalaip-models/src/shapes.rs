//! # Entity-Shape Validators
//!
//! The decision procedure that distinguishes entity kinds by presence,
//! absence, and value constraints on payload fields.
//!
//! ## Entity Kind Hierarchy
//!
//! ```text
//! Creation (abstract: string `name`)
//! ├── Work           no `manifestationOfWork`; `isManifestation` absent or false
//! └── Manifestation  string `manifestationOfWork`; `isManifestation` absent or true
//!
//! Right (abstract: string `allowedBy` + `license`; no `rightsOf`)
//! Copyright          string `rightsOf`; no `allowedBy`
//! ```
//!
//! Work and Manifestation are mutually exclusive views of a Creation
//! payload; Right and Copyright are mutually exclusive views distinguished
//! by `allowedBy`+`license` vs `rightsOf`. No payload carries both sets of
//! discriminant keys.
//!
//! ## Strict Boolean Identity
//!
//! The `isManifestation` discriminant compares by identity, not truthiness:
//! only the exact JSON boolean satisfies it. `1`, `0` and `"true"` are
//! rejected even though they are truthy/falsy-equivalent.
//!
//! ## Decorated Validators
//!
//! The Right and Copyright validators are exported only in their decorated
//! form: the forbidden-key exclusion wraps the field checks, so the
//! exclusion always runs first. The undecorated field checks are private.

use serde_json::Value;

use coalaip_core::{ModelDataError, Payload};

use crate::combinators::without_keys;
use crate::validator::{ValidationContext, Validator};

/// The `name` field every Creation requires.
pub const FIELD_NAME: &str = "name";
/// The Work identifier a Manifestation points at.
pub const FIELD_MANIFESTATION_OF_WORK: &str = "manifestationOfWork";
/// The boolean discriminant between Work and Manifestation payloads.
pub const FIELD_IS_MANIFESTATION: &str = "isManifestation";
/// The source Right a derived Right is allowed by.
pub const FIELD_ALLOWED_BY: &str = "allowedBy";
/// The license a derived Right is granted under.
pub const FIELD_LICENSE: &str = "license";
/// The Creation a Copyright asserts full rights over.
pub const FIELD_RIGHTS_OF: &str = "rightsOf";

/// Require `field` to be present and hold a JSON string.
fn require_string(
    ctx: &ValidationContext<'_>,
    data: &Payload,
    field: &str,
) -> Result<(), ModelDataError> {
    match data.get(field) {
        Some(Value::String(_)) => Ok(()),
        other => Err(ModelDataError::ExpectedString {
            field: field.to_string(),
            attribute: ctx.attribute.to_string(),
            entity_kind: ctx.entity_kind.to_string(),
            given: other.cloned().unwrap_or(Value::Null),
        }),
    }
}

/// Require `flag`, if present at all, to be exactly the JSON boolean
/// `expected`. Absence passes.
fn require_flag(
    ctx: &ValidationContext<'_>,
    data: &Payload,
    flag: &str,
    expected: bool,
) -> Result<(), ModelDataError> {
    match data.get(flag) {
        None => Ok(()),
        Some(Value::Bool(given)) if *given == expected => Ok(()),
        Some(other) => Err(ModelDataError::FlagMismatch {
            flag: flag.to_string(),
            expected,
            given: other.clone(),
            attribute: ctx.attribute.to_string(),
            entity_kind: ctx.entity_kind.to_string(),
        }),
    }
}

/// A Creation payload must include at least a string `name`.
///
/// # Errors
///
/// Returns [`ModelDataError::ExpectedString`] when `name` is missing or not
/// a string.
pub fn is_creation_model(
    ctx: &ValidationContext<'_>,
    data: &Payload,
) -> Result<(), ModelDataError> {
    require_string(ctx, data, FIELD_NAME)
}

/// A Work payload must not include keys that indicate the payload is a
/// Manifestation: no `manifestationOfWork`, and `isManifestation` must be
/// exactly `false` if given.
///
/// # Errors
///
/// Returns a [`ModelDataError`] when the Creation rules fail, when
/// `manifestationOfWork` is present with any value, or when
/// `isManifestation` is present and not the exact boolean `false`.
pub fn is_work_model(
    ctx: &ValidationContext<'_>,
    data: &Payload,
) -> Result<(), ModelDataError> {
    is_creation_model(ctx, data)?;

    if data.contains_key(FIELD_MANIFESTATION_OF_WORK) {
        return Err(ModelDataError::KeyMustBeAbsent {
            key: FIELD_MANIFESTATION_OF_WORK.to_string(),
            attribute: ctx.attribute.to_string(),
            entity_kind: ctx.entity_kind.to_string(),
        });
    }

    require_flag(ctx, data, FIELD_IS_MANIFESTATION, false)
}

/// A Manifestation payload must include a string `manifestationOfWork`
/// naming the Work it instantiates, and `isManifestation` must be exactly
/// `true` if given.
///
/// # Errors
///
/// Returns a [`ModelDataError`] when the Creation rules fail, when
/// `manifestationOfWork` is missing or not a string, or when
/// `isManifestation` is present and not the exact boolean `true`.
pub fn is_manifestation_model(
    ctx: &ValidationContext<'_>,
    data: &Payload,
) -> Result<(), ModelDataError> {
    is_creation_model(ctx, data)?;
    require_string(ctx, data, FIELD_MANIFESTATION_OF_WORK)?;
    require_flag(ctx, data, FIELD_IS_MANIFESTATION, true)
}

/// Field checks for a derived Right: string `allowedBy` and `license`.
///
/// `allowedBy` indicates the Right is derived from and allowed by a source
/// Right; such a payload cannot contain the full rights to a Creation, so
/// the exported validator wraps this in a `rightsOf` exclusion.
fn right_model_fields(
    ctx: &ValidationContext<'_>,
    data: &Payload,
) -> Result<(), ModelDataError> {
    require_string(ctx, data, FIELD_ALLOWED_BY)?;
    require_string(ctx, data, FIELD_LICENSE)
}

/// Field check for a Copyright: string `rightsOf`.
///
/// `rightsOf` indicates the Right contains full rights to an existing
/// Manifestation or Work; the exported validator wraps this in an
/// `allowedBy` exclusion.
fn copyright_model_fields(
    ctx: &ValidationContext<'_>,
    data: &Payload,
) -> Result<(), ModelDataError> {
    require_string(ctx, data, FIELD_RIGHTS_OF)
}

/// The Creation shape as a registrable [`Validator`].
pub fn creation_model_validator() -> Validator {
    Validator::new(is_creation_model)
}

/// The Work shape as a registrable [`Validator`].
pub fn work_model_validator() -> Validator {
    Validator::new(is_work_model)
}

/// The Manifestation shape as a registrable [`Validator`].
pub fn manifestation_model_validator() -> Validator {
    Validator::new(is_manifestation_model)
}

/// The Right shape as a registrable [`Validator`]: the `rightsOf`
/// exclusion wrapping the `allowedBy`/`license` field checks.
pub fn right_model_validator() -> Validator {
    without_keys(&[FIELD_RIGHTS_OF], Validator::new(right_model_fields))
}

/// The Copyright shape as a registrable [`Validator`]: the `allowedBy`
/// exclusion wrapping the `rightsOf` field check.
pub fn copyright_model_validator() -> Validator {
    without_keys(&[FIELD_ALLOWED_BY], Validator::new(copyright_model_fields))
}

// ─── Tests ───────────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        Payload::try_from(value).unwrap()
    }

    fn ctx() -> ValidationContext<'static> {
        ValidationContext::new("Work", "data")
    }

    /// Strategy for arbitrary JSON leaf values that are not strings.
    fn non_string_value() -> impl Strategy<Value = serde_json::Value> {
        prop_oneof![
            Just(json!(null)),
            any::<bool>().prop_map(|b| json!(b)),
            any::<i64>().prop_map(|n| json!(n)),
            prop::collection::vec(any::<i64>(), 0..4).prop_map(|v| json!(v)),
        ]
    }

    /// Strategy for payload field names that are not discriminant keys.
    fn neutral_key() -> impl Strategy<Value = String> {
        "[a-z]{1,12}".prop_filter("not a discriminant key", |k| {
            ![
                FIELD_NAME,
                FIELD_MANIFESTATION_OF_WORK,
                FIELD_IS_MANIFESTATION,
                FIELD_ALLOWED_BY,
                FIELD_LICENSE,
                FIELD_RIGHTS_OF,
            ]
            .contains(&k.as_str())
        })
    }

    proptest! {
        /// Any payload with a non-string `name` fails the Creation shape.
        #[test]
        fn creation_rejects_non_string_name(given in non_string_value()) {
            let data = payload(json!({"name": given}));
            prop_assert!(is_creation_model(&ctx(), &data).is_err());
        }

        /// Any payload with a string `name` and no other fields passes every
        /// Creation-family shape that does not require more.
        #[test]
        fn creation_accepts_any_string_name(name in "[\\PC]{0,40}") {
            let data = payload(json!({"name": name}));
            prop_assert!(is_creation_model(&ctx(), &data).is_ok());
            prop_assert!(is_work_model(&ctx(), &data).is_ok());
        }

        /// Neutral extra fields never change a Work verdict.
        #[test]
        fn work_ignores_neutral_fields(
            key in neutral_key(),
            value in non_string_value(),
        ) {
            let mut data = payload(json!({"name": "Song A"}));
            data.insert(key, value);
            prop_assert!(is_work_model(&ctx(), &data).is_ok());
        }

        /// `manifestationOfWork` with any value at all fails the Work shape.
        #[test]
        fn work_rejects_manifestation_of_work(value in non_string_value()) {
            let data = payload(json!({"name": "Song A", "manifestationOfWork": value}));
            prop_assert!(is_work_model(&ctx(), &data).is_err());
        }

        /// A non-boolean `isManifestation` fails both Creation subtypes:
        /// identity comparison admits no truthy/falsy stand-ins.
        #[test]
        fn flag_stand_ins_rejected_by_both_shapes(
            value in non_string_value().prop_filter("not a bool", |v| !v.is_boolean()),
        ) {
            let work = payload(json!({"name": "Song A", "isManifestation": value.clone()}));
            prop_assert!(is_work_model(&ctx(), &work).is_err());

            let manifestation = payload(json!({
                "name": "Recording",
                "manifestationOfWork": "abc123",
                "isManifestation": value,
            }));
            prop_assert!(
                is_manifestation_model(&ctx(), &manifestation).is_err()
            );
        }

        /// `rightsOf` always short-circuits the Right shape, whatever else
        /// the payload holds.
        #[test]
        fn right_always_short_circuits_on_rights_of(
            allowed_by in non_string_value(),
            rights_of in non_string_value(),
        ) {
            let v = right_model_validator();
            let data = payload(json!({
                "allowedBy": allowed_by,
                "license": "MIT",
                "rightsOf": rights_of,
            }));
            let err = v.validate(&ctx(), &data).unwrap_err();
            let short_circuited = matches!(err, ModelDataError::ForbiddenKeys { .. });
            prop_assert!(short_circuited, "expected the exclusion to fire, got: {err}");
        }

        /// Validators are pure: two runs over the same payload agree.
        #[test]
        fn shape_verdicts_are_deterministic(
            name in prop_oneof![Just(json!(null)), "[a-z]{0,8}".prop_map(|s| json!(s))],
            flag in prop_oneof![Just(json!(true)), Just(json!(false)), Just(json!(1))],
        ) {
            let data = payload(json!({"name": name, "isManifestation": flag}));
            let first = is_work_model(&ctx(), &data).is_ok();
            let second = is_work_model(&ctx(), &data).is_ok();
            prop_assert_eq!(first, second);
        }
    }
}
