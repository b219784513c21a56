//! # coalaip-models — Validation Rules for COALA IP Entities
//!
//! The decision procedure that determines whether a field payload may
//! become the "data" portion of an entity of a given kind (Creation, Work,
//! Manifestation, Right, Copyright), decomposed into:
//!
//! - **Primitive checks** — atomic predicates over a single slot value
//!   ([`is_callable`], the string-typed field checks inside the shapes).
//! - **Combinators** — higher-order constructors that build a new check
//!   from an existing one ([`without_keys`], shared validator references).
//! - **Entity-shape validators** — one per entity kind, composed from the
//!   primitives and combinators ([`shapes`]).
//!
//! Control flow: the attribute-assignment layer ([`ModelAttributes`],
//! [`EntityModel`]) invokes the relevant validator whenever a slot is set,
//! passing a context naming the entity kind and attribute plus the
//! candidate payload; the validator either returns `Ok(())` or fails with
//! a structured error. There is no persistent state and no data flow
//! between validators beyond explicitly shared references.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Validators are pure, `Send + Sync`, and never mutate their inputs.

pub mod combinators;
pub mod model;
pub mod shapes;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use coalaip_core::{ModelDataError, ModelError, Payload};
pub use combinators::without_keys;
pub use model::{EntityModel, ModelAttributes, DATA_ATTR, VALIDATOR_ATTR};
pub use shapes::{
    copyright_model_validator, creation_model_validator, is_creation_model,
    is_manifestation_model, is_work_model, manifestation_model_validator,
    right_model_validator, work_model_validator,
};
pub use validator::{is_callable, AttributeValue, ValidationContext, Validator};
