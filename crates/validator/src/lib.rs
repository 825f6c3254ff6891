//! # warden-validator
//!
//! The `EntityNotExist` constraint: a field's value must not already exist as
//! a lookup key in a persisted collection.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use serde_json::json;
//! use warden_validator::prelude::*;
//!
//! let lookup = Arc::new(InMemoryLookup::new());
//! lookup.insert("User", json!({"id": 1, "uuid": "3f1c"}));
//!
//! let validator = EntityNotExistValidator::new(lookup);
//! let rule = entity_not_exist!(entity: "User", property: "uuid");
//!
//! // Blank values are never looked up.
//! assert!(validator.validate(&json!(null), &rule).unwrap().is_none());
//! assert!(validator.validate(&json!("9a0b"), &rule).unwrap().is_none());
//!
//! let violation = validator.validate(&json!("3f1c"), &rule).unwrap().unwrap();
//! assert_eq!(violation.param("%value%"), Some("3f1c"));
//! ```
//!
//! ## Pieces
//!
//! - [`EntityNotExist`] — the declaration (`entity`, `property`, `message`).
//! - [`EntityNotExistValidator`] — evaluates a declaration against an
//!   injected [`EntityLookup`].
//! - [`Violation`] — template plus substitution parameters; the caller
//!   renders.
//! - [`ConstraintError`] — fatal setup or backend failures, never used for
//!   data that fails the rule.

mod macros;

pub mod constraint;
pub mod error;
pub mod lookup;
pub mod prelude;
pub mod validator;
pub mod violation;

mod value;

pub use constraint::{Constraint, DEFAULT_MESSAGE, DEFAULT_PROPERTY, EntityNotExist};
pub use error::{ConstraintError, LookupError};
pub use lookup::{Criteria, EntityLookup, InMemoryLookup};
pub use validator::{ConstraintValidator, EntityNotExistValidator};
pub use violation::Violation;
