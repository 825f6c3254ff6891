//! Constraint validators.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::constraint::{Constraint, EntityNotExist};
use crate::error::ConstraintError;
use crate::lookup::{Criteria, EntityLookup};
use crate::value;
use crate::violation::Violation;

/// Validator half of a constraint/validator pair.
///
/// Returns `Ok(None)` when the value passes, `Ok(Some(violation))` when it
/// fails the rule, and `Err(_)` when evaluation could not run at all.
pub trait ConstraintValidator: Send + Sync {
    fn validate(
        &self,
        value: &Value,
        constraint: &dyn Constraint,
    ) -> Result<Option<Violation>, ConstraintError>;
}

/// Evaluates [`EntityNotExist`] against an injected [`EntityLookup`].
///
/// Stateless apart from the shared lookup; safe to call concurrently when
/// the lookup is.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use warden_validator::{EntityNotExist, EntityNotExistValidator, InMemoryLookup};
///
/// let lookup = Arc::new(InMemoryLookup::new());
/// lookup.insert("User", json!({"id": "alice"}));
///
/// let validator = EntityNotExistValidator::new(lookup);
/// let rule = EntityNotExist::new("User");
///
/// assert!(validator.evaluate(&json!("bob"), &rule).unwrap().is_none());
///
/// let violation = validator.evaluate(&json!("alice"), &rule).unwrap().unwrap();
/// assert_eq!(
///     violation.render(),
///     r#"Entity "User" with property "id": "alice" does exist."#
/// );
/// ```
#[derive(Clone)]
pub struct EntityNotExistValidator {
    lookup: Arc<dyn EntityLookup>,
}

impl EntityNotExistValidator {
    pub fn new(lookup: Arc<dyn EntityLookup>) -> Self {
        Self { lookup }
    }

    /// Typed evaluation, bypassing the constraint downcast.
    pub fn evaluate(
        &self,
        value: &Value,
        constraint: &EntityNotExist,
    ) -> Result<Option<Violation>, ConstraintError> {
        if value::is_blank(value) {
            tracing::debug!(
                entity = constraint.entity(),
                "blank value, skipping existence check"
            );
            return Ok(None);
        }

        let rendered = Self::prepare(value, constraint).inspect_err(|err| {
            tracing::error!(
                error = %err,
                entity = constraint.entity(),
                property = constraint.property(),
                "misconfigured constraint"
            );
        })?;

        tracing::debug!(
            entity = constraint.entity(),
            property = constraint.property(),
            "checking entity existence"
        );
        let criteria = Criteria::by(constraint.property(), value.clone());
        let found = self.lookup.find_one_by(constraint.entity(), &criteria)?;

        if found.is_none() {
            return Ok(None);
        }

        tracing::debug!(
            entity = constraint.entity(),
            property = constraint.property(),
            "entity already exists"
        );
        Ok(Some(
            Violation::new(EntityNotExist::ENTITY_EXISTS, constraint.message_template())
                .with_param("%entity%", constraint.entity())
                .with_param("%property%", constraint.property())
                .with_param("%value%", rendered)
                .with_invalid_value(value.clone()),
        ))
    }

    /// Declaration and value checks that must pass before any lookup.
    fn prepare(value: &Value, constraint: &EntityNotExist) -> Result<String, ConstraintError> {
        constraint.ensure_well_formed()?;
        value::canonical(value)
            .map(std::borrow::Cow::into_owned)
            .ok_or(ConstraintError::UnsupportedValue {
                kind: value::kind(value),
            })
    }
}

impl ConstraintValidator for EntityNotExistValidator {
    fn validate(
        &self,
        value: &Value,
        constraint: &dyn Constraint,
    ) -> Result<Option<Violation>, ConstraintError> {
        let Some(constraint) = constraint.as_any().downcast_ref::<EntityNotExist>() else {
            return Err(ConstraintError::UnexpectedConstraint {
                expected: EntityNotExist::NAME,
                actual: constraint.name(),
            });
        };
        self.evaluate(value, constraint)
    }
}

impl fmt::Debug for EntityNotExistValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityNotExistValidator").finish_non_exhaustive()
    }
}
