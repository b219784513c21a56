//! # coalaip-core — Foundational Types for COALA IP Entity Models
//!
//! This crate is the bedrock of the COALA IP model stack. It defines the
//! field payload container and the structured error hierarchy that every
//! validator in the workspace speaks.
//!
//! ## Key Design Principles
//!
//! 1. **One payload type.** The "data" portion of every entity instance is a
//!    [`Payload`] — a mapping from string keys to JSON values with a small,
//!    documented capability set (membership test, key-set retrieval, indexed
//!    read). Validators depend only on that capability set and never mutate
//!    a payload.
//!
//! 2. **Structured errors.** Rejections carry the entity kind, the attribute
//!    under validation, and the offending value as named fields, so the
//!    rendered message is self-contained and needs no external lookup.
//!
//! 3. **Strict runtime types.** A field required "as a string" accepts only
//!    a JSON string — not `null`, not a number, not a boolean. Discriminant
//!    flags compare by identity, not truthiness.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `coalaip-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod payload;

// Re-export primary types for ergonomic imports.
pub use error::{ModelDataError, ModelError};
pub use payload::Payload;
