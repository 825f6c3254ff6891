//! Prelude module for convenient imports.
//!
//! `use warden_validator::prelude::*;` brings in the traits, the declaration
//! macro, and the types needed to declare and evaluate constraints.

pub use crate::constraint::{Constraint, EntityNotExist};
pub use crate::entity_not_exist;
pub use crate::error::{ConstraintError, LookupError};
pub use crate::lookup::{Criteria, EntityLookup, InMemoryLookup};
pub use crate::validator::{ConstraintValidator, EntityNotExistValidator};
pub use crate::violation::Violation;
