//! # Validator Combinators
//!
//! Higher-order constructors that build a new [`Validator`] from an
//! existing one.
//!
//! ## Ordering Invariant
//!
//! [`without_keys`] checks the forbidden key set *before* delegating to the
//! wrapped validator. Mutual-exclusion rules (a Right payload must not look
//! like a Copyright payload) therefore short-circuit independently of
//! whatever the wrapped validator would have reported.

use coalaip_core::{ModelDataError, Payload};

use crate::validator::{ValidationContext, Validator};

/// Wrap `inner` so that payloads containing any of the `forbidden` keys are
/// rejected before `inner` runs.
///
/// The intersection of `forbidden` with the payload's key set is computed
/// first. If it is non-empty the combinator fails immediately with
/// [`ModelDataError::ForbiddenKeys`], listing how many and which forbidden
/// keys were found, the attribute, and the owning entity kind. Only an
/// empty intersection delegates to `inner` with the original arguments.
pub fn without_keys(forbidden: &'static [&'static str], inner: Validator) -> Validator {
    Validator::new(move |ctx: &ValidationContext<'_>, data: &Payload| {
        let matched: Vec<String> = forbidden
            .iter()
            .filter(|key| data.contains_key(key))
            .map(|key| key.to_string())
            .collect();

        if !matched.is_empty() {
            return Err(ModelDataError::ForbiddenKeys {
                found: matched.len(),
                matched: matched.into(),
                forbidden: forbidden.iter().map(|key| key.to_string()).collect(),
                attribute: ctx.attribute.to_string(),
                entity_kind: ctx.entity_kind.to_string(),
            });
        }

        inner.validate(ctx, data)
    })
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn payload(value: serde_json::Value) -> Payload {
        Payload::try_from(value).unwrap()
    }

    /// A validator that counts its invocations, for asserting the
    /// short-circuit order.
    fn counting_validator(calls: Arc<AtomicUsize>) -> Validator {
        Validator::new(move |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    #[test]
    fn test_empty_intersection_delegates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let wrapped = without_keys(&["rightsOf"], counting_validator(calls.clone()));

        let ctx = ValidationContext::new("Right", "data");
        let data = payload(json!({"allowedBy": "right-1", "license": "MIT"}));
        wrapped.validate(&ctx, &data).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_forbidden_key_short_circuits_before_inner() {
        let calls = Arc::new(AtomicUsize::new(0));
        let wrapped = without_keys(&["rightsOf"], counting_validator(calls.clone()));

        let ctx = ValidationContext::new("Right", "data");
        let data = payload(json!({"rightsOf": "work-9"}));
        let err = wrapped.validate(&ctx, &data).unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 0, "inner validator must not run");
        match &err {
            ModelDataError::ForbiddenKeys { found, matched, .. } => {
                assert_eq!(*found, 1);
                assert_eq!(matched.names(), ["rightsOf"]);
            }
            other => panic!("Expected ForbiddenKeys, got: {other}"),
        }
    }

    #[test]
    fn test_multiple_forbidden_keys_all_listed() {
        let wrapped = without_keys(&["rightsOf", "allowedBy"], Validator::new(|_, _| Ok(())));
        let ctx = ValidationContext::new("Thing", "data");
        let data = payload(json!({"rightsOf": "a", "allowedBy": "b", "name": "c"}));
        let err = wrapped.validate(&ctx, &data).unwrap_err();
        match &err {
            ModelDataError::ForbiddenKeys {
                found,
                matched,
                forbidden,
                ..
            } => {
                assert_eq!(*found, 2);
                assert_eq!(matched.len(), 2);
                assert_eq!(forbidden.names(), ["rightsOf", "allowedBy"]);
            }
            other => panic!("Expected ForbiddenKeys, got: {other}"),
        }
    }

    #[test]
    fn test_error_names_attribute_and_entity_kind() {
        let wrapped = without_keys(&["allowedBy"], Validator::new(|_, _| Ok(())));
        let ctx = ValidationContext::new("Copyright", "data");
        let data = payload(json!({"allowedBy": "right-1"}));
        let msg = wrapped.validate(&ctx, &data).unwrap_err().to_string();
        assert!(msg.contains("'allowedBy'"));
        assert!(msg.contains("'data'"));
        assert!(msg.contains("'Copyright'"));
    }

    #[test]
    fn test_inner_failure_propagates_unchanged() {
        let inner = Validator::new(|ctx: &ValidationContext<'_>, _: &Payload| {
            Err(ModelDataError::KeyMustBeAbsent {
                key: "x".into(),
                attribute: ctx.attribute.to_string(),
                entity_kind: ctx.entity_kind.to_string(),
            })
        });
        let wrapped = without_keys(&["rightsOf"], inner);
        let ctx = ValidationContext::new("Right", "data");
        let err = wrapped.validate(&ctx, &payload(json!({}))).unwrap_err();
        assert!(matches!(err, ModelDataError::KeyMustBeAbsent { .. }));
    }

    #[test]
    fn test_forbidden_key_value_is_irrelevant() {
        let wrapped = without_keys(&["rightsOf"], Validator::new(|_, _| Ok(())));
        let ctx = ValidationContext::new("Right", "data");
        for value in [json!(null), json!(false), json!({}), json!("work-9")] {
            let data = payload(json!({"rightsOf": value}));
            assert!(wrapped.validate(&ctx, &data).is_err());
        }
    }
}
