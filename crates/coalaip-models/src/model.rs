//! # Model Attribute Registry
//!
//! The seam between the validation rule set and the attribute-assignment
//! mechanism that constructs entities. A [`ModelAttributes`] table maps
//! each named attribute slot of one entity kind to the [`Validator`] that
//! guards it; assigning a payload to a slot runs that validator with a
//! context naming the entity kind and the attribute.
//!
//! ## Validator Sharing
//!
//! Two slots that should share one validator definition are wired with
//! [`ModelAttributes::register_shared`], which copies the sibling slot's
//! validator reference at registration time. A sibling with no validator
//! yet is an attribute-resolution error — the construction-order
//! precondition is checked once, when the table is built, not on every
//! validation call.
//!
//! ## Lifecycle
//!
//! A registry and the payloads it validates are transient: built by the
//! caller immediately before entity construction, consulted once per
//! attribute assignment, then dropped. Nothing is retained across calls.

use std::collections::BTreeMap;

use serde_json::Value;

use coalaip_core::{ModelError, Payload};

use crate::validator::{is_callable, AttributeValue, ValidationContext, Validator};

/// The attribute slot a model's own validator lives in.
pub const VALIDATOR_ATTR: &str = "validator";
/// The attribute slot a model's data payload lives in.
pub const DATA_ATTR: &str = "data";

/// Validator table for the attribute slots of one entity kind.
#[derive(Debug, Clone, Default)]
pub struct ModelAttributes {
    entity_kind: String,
    validators: BTreeMap<String, Validator>,
}

impl ModelAttributes {
    /// Create an empty table for the named entity kind.
    pub fn new(entity_kind: impl Into<String>) -> Self {
        Self {
            entity_kind: entity_kind.into(),
            validators: BTreeMap::new(),
        }
    }

    /// The entity kind this table belongs to.
    pub fn entity_kind(&self) -> &str {
        &self.entity_kind
    }

    /// Register a validator on an attribute slot, replacing any previous one.
    pub fn register(&mut self, attribute: impl Into<String>, validator: Validator) {
        self.validators.insert(attribute.into(), validator);
    }

    /// Register `attribute` to share the validator already registered on
    /// `sibling`.
    ///
    /// Both slots end up holding references to the same underlying check.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownAttribute`] naming the sibling when no
    /// validator is registered on it yet; callers must wire slots in
    /// dependency order.
    pub fn register_shared(
        &mut self,
        attribute: impl Into<String>,
        sibling: &str,
    ) -> Result<(), ModelError> {
        let shared = self
            .validators
            .get(sibling)
            .cloned()
            .ok_or_else(|| ModelError::UnknownAttribute {
                attribute: sibling.to_string(),
                entity_kind: self.entity_kind.clone(),
            })?;
        self.validators.insert(attribute.into(), shared);
        Ok(())
    }

    /// The validator registered on an attribute slot, if any.
    pub fn validator(&self, attribute: &str) -> Option<&Validator> {
        self.validators.get(attribute)
    }

    /// Validate a candidate payload for an attribute slot.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownAttribute`] when the slot has no
    /// validator, or the validator's own [`coalaip_core::ModelDataError`]
    /// when the payload violates the slot's rules.
    pub fn validate(&self, attribute: &str, data: &Payload) -> Result<(), ModelError> {
        let validator =
            self.validator(attribute)
                .ok_or_else(|| ModelError::UnknownAttribute {
                    attribute: attribute.to_string(),
                    entity_kind: self.entity_kind.clone(),
                })?;
        let ctx = ValidationContext::new(&self.entity_kind, attribute);
        validator.validate(&ctx, data)?;
        Ok(())
    }

    /// One attribute assignment: route the candidate value through the
    /// check its runtime kind calls for, handing the value back on success
    /// so construction can keep it.
    ///
    /// Payloads — and JSON objects, which are payloads in wire form — are
    /// validated by the slot's registered validator. Validator values take
    /// the invocability check. Any other JSON value satisfies neither
    /// primitive and fails the invocability check naming the attribute.
    /// A failing assignment aborts the construction in progress; the value
    /// is only returned when the slot accepted it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownAttribute`] for a payload aimed at a
    /// slot with no validator, the slot validator's rejection for a payload
    /// that violates its rules, or [`ModelError::NotCallable`] for a
    /// non-payload, non-validator value.
    pub fn assign(
        &self,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<AttributeValue, ModelError> {
        match &value {
            AttributeValue::Data(data) => self.validate(attribute, data)?,
            AttributeValue::Json(Value::Object(map)) => {
                let data = Payload::from(map.clone());
                self.validate(attribute, &data)?;
            }
            AttributeValue::Validator(_) | AttributeValue::Json(_) => {
                let ctx = ValidationContext::new(&self.entity_kind, attribute);
                is_callable(&ctx, &value)?;
            }
        }
        Ok(value)
    }
}

// ─── Entity Model ────────────────────────────────────────────────────

/// One validated entity model: an entity kind, the validator guarding its
/// data, and the data payload that passed it.
///
/// Construction is all-or-nothing: the validator slot takes the
/// invocability check, then the data slot is validated by that validator.
/// A single failing assignment aborts the whole construction; an
/// `EntityModel` value therefore always holds data its validator accepted.
#[derive(Debug, Clone)]
pub struct EntityModel {
    entity_kind: String,
    validator: Validator,
    data: Payload,
}

impl EntityModel {
    /// Construct a model, validating both attribute slots.
    ///
    /// The `validator` slot receives the untyped `slot_value` and must pass
    /// the invocability check; the `data` slot is then validated by the
    /// validator the slot holds — the two slots share the reference, so the
    /// check that guards the data is exactly the one stored on the model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotCallable`] when `slot_value` is not a
    /// validator, or the validator's rejection when `data` violates the
    /// entity kind's shape rules.
    pub fn new(
        entity_kind: impl Into<String>,
        slot_value: AttributeValue,
        data: Payload,
    ) -> Result<Self, ModelError> {
        let entity_kind = entity_kind.into();

        let validator_ctx = ValidationContext::new(&entity_kind, VALIDATOR_ATTR);
        let validator = slot_value.into_validator(&validator_ctx)?;

        let data_ctx = ValidationContext::new(&entity_kind, DATA_ATTR);
        validator.validate(&data_ctx, &data)?;

        Ok(Self {
            entity_kind,
            validator,
            data,
        })
    }

    /// The entity kind of this model.
    pub fn entity_kind(&self) -> &str {
        &self.entity_kind
    }

    /// The validated data payload.
    pub fn data(&self) -> &Payload {
        &self.data
    }

    /// The validator guarding this model's data.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
