//! Constraint declarations.
//!
//! A constraint is an immutable descriptor attached to a field. It carries
//! configuration only; the paired [`ConstraintValidator`](crate::ConstraintValidator)
//! does the work.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConstraintError;

/// Lookup property used when a declaration does not name one.
pub const DEFAULT_PROPERTY: &str = "id";

/// Message template used when a declaration does not supply one.
pub const DEFAULT_MESSAGE: &str = r#"Entity "%entity%" with property "%property%": "%value%" does exist."#;

/// A declarative validation rule.
///
/// Validators accept `&dyn Constraint` and downcast through [`as_any`] to the
/// declaration type they understand.
///
/// [`as_any`]: Constraint::as_any
pub trait Constraint: fmt::Debug + Send + Sync + 'static {
    /// Short name of the constraint kind, used in error messages.
    fn name(&self) -> &'static str;

    /// Upcast used by validators to recover the concrete declaration.
    fn as_any(&self) -> &dyn Any;
}

/// Rejects values that already exist under `property` in the `entity`
/// collection.
///
/// Construction never fails. An empty `entity` or `property` is reported as
/// a configuration error the first time a non-blank value is evaluated.
///
/// # Examples
///
/// ```
/// use warden_validator::EntityNotExist;
///
/// let by_id = EntityNotExist::new("User");
/// assert_eq!(by_id.property(), "id");
///
/// let by_uuid = EntityNotExist::new("User").with_property("uuid");
/// assert_eq!(by_uuid.property(), "uuid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityNotExist {
    entity: Cow<'static, str>,
    #[serde(default = "default_property")]
    property: Cow<'static, str>,
    #[serde(default = "default_message")]
    message: Cow<'static, str>,
}

fn default_property() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_PROPERTY)
}

fn default_message() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_MESSAGE)
}

impl EntityNotExist {
    /// Constraint name reported in configuration errors.
    pub const NAME: &'static str = "EntityNotExist";

    /// Violation code for "a record with this value already exists".
    pub const ENTITY_EXISTS: &'static str = "entity_exists";

    /// Creates a declaration for `entity` with the default property and
    /// message.
    pub fn new(entity: impl Into<Cow<'static, str>>) -> Self {
        Self {
            entity: entity.into(),
            property: default_property(),
            message: default_message(),
        }
    }

    /// Const constructor for `static` and `const` declarations.
    ///
    /// Prefer the [`entity_not_exist!`](crate::entity_not_exist) macro, which
    /// fills in defaults.
    pub const fn from_static(
        entity: &'static str,
        property: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            entity: Cow::Borrowed(entity),
            property: Cow::Borrowed(property),
            message: Cow::Borrowed(message),
        }
    }

    /// Loads a declaration from JSON configuration.
    ///
    /// `entity` is required; `property` and `message` fall back to their
    /// defaults. Unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self, ConstraintError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the lookup property.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_property(mut self, property: impl Into<Cow<'static, str>>) -> Self {
        self.property = property.into();
        self
    }

    /// Sets the message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Target collection identifier.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Property matched within the collection.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Message template with `%entity%`, `%property%` and `%value%`
    /// placeholders.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn message_template(&self) -> Cow<'static, str> {
        self.message.clone()
    }

    /// Checks that the declaration names both an entity and a property.
    pub fn ensure_well_formed(&self) -> Result<(), ConstraintError> {
        if self.entity.is_empty() {
            return Err(ConstraintError::MissingEntity {
                constraint: Self::NAME,
            });
        }
        if self.property.is_empty() {
            return Err(ConstraintError::MissingProperty {
                constraint: Self::NAME,
            });
        }
        Ok(())
    }
}

impl Constraint for EntityNotExist {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
