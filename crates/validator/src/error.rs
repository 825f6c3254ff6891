//! Error types for constraint evaluation.
//!
//! Two failure families exist and they never mix:
//!
//! - [`ConstraintError`] — the evaluation itself could not run. Either the
//!   rule was declared incorrectly (a bug in rule setup) or the lookup
//!   backend failed.
//! - [`Violation`](crate::Violation) — the data failed the rule. That is an
//!   `Ok(Some(_))` result, not an error.

/// Failure raised by an [`EntityLookup`](crate::EntityLookup) backend.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The lookup has no collection registered under this name.
    #[error("unknown entity `{entity}`")]
    UnknownEntity { entity: String },

    /// The backend failed (connectivity, query execution, decoding).
    #[error("lookup backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LookupError {
    /// Wraps a foreign backend error.
    pub fn backend(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(error))
    }
}

/// Fatal condition that aborts a constraint evaluation.
///
/// Every variant except [`ConstraintError::Lookup`] is a configuration error:
/// the constraint was declared or wired incorrectly and retrying with other
/// input will not help.
#[derive(Debug, thiserror::Error)]
pub enum ConstraintError {
    /// A validator received a constraint of another kind.
    #[error("you can only pass {expected} constraint to this validator, got {actual}")]
    UnexpectedConstraint {
        expected: &'static str,
        actual: &'static str,
    },

    /// The constraint names no target entity.
    #[error("must set \"entity\" on \"{constraint}\" constraint")]
    MissingEntity { constraint: &'static str },

    /// The constraint names no lookup property.
    #[error("must set \"property\" on \"{constraint}\" constraint")]
    MissingProperty { constraint: &'static str },

    /// The candidate value has no canonical scalar form.
    #[error("cannot look up a {kind} value; attach the constraint to a scalar field")]
    UnsupportedValue { kind: &'static str },

    /// A declaration could not be loaded from configuration.
    #[error("invalid constraint declaration: {0}")]
    InvalidDeclaration(#[from] serde_json::Error),

    /// The lookup backend failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ConstraintError {
    /// Returns `true` when the error comes from rule setup rather than from
    /// the lookup backend.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Lookup(_))
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnexpectedConstraint { .. } => "CONSTRAINT_UNEXPECTED",
            Self::MissingEntity { .. } => "CONSTRAINT_MISSING_ENTITY",
            Self::MissingProperty { .. } => "CONSTRAINT_MISSING_PROPERTY",
            Self::UnsupportedValue { .. } => "CONSTRAINT_UNSUPPORTED_VALUE",
            Self::InvalidDeclaration(_) => "CONSTRAINT_INVALID_DECLARATION",
            Self::Lookup(_) => "CONSTRAINT_LOOKUP",
        }
    }
}
