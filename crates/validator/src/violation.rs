//! The violation record returned when a value fails a constraint.
//!
//! A [`Violation`] carries the unrendered message template together with
//! its substitution parameters so that the caller can render, translate, or
//! serialize it. [`Violation::render`] performs the default substitution.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A single constraint violation with parameterized message.
///
/// # Examples
///
/// ```
/// use warden_validator::Violation;
///
/// let violation = Violation::new("entity_exists", "%entity% #%value% exists")
///     .with_param("%entity%", "User")
///     .with_param("%value%", "7");
///
/// assert_eq!(violation.render(), "User #7 exists");
/// assert_eq!(violation.param("%entity%"), Some("User"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    code: Cow<'static, str>,
    template: Cow<'static, str>,
    params: Vec<(Cow<'static, str>, String)>,
    invalid_value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<Cow<'static, str>>,
}

impl Violation {
    /// Creates a violation with a code and an unrendered message template.
    pub fn new(code: impl Into<Cow<'static, str>>, template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            template: template.into(),
            params: Vec::new(),
            invalid_value: Value::Null,
            field: None,
        }
    }

    /// Adds a substitution parameter. `key` is the literal placeholder,
    /// e.g. `"%value%"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Records the value that failed validation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_invalid_value(mut self, value: Value) -> Self {
        self.invalid_value = value;
        self
    }

    /// Sets the field path the violation belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Stable code for programmatic handling and i18n.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The unrendered message template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Substitution parameters in insertion order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Looks up a parameter value by placeholder.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_str())
    }

    /// The value that failed validation.
    pub fn invalid_value(&self) -> &Value {
        &self.invalid_value
    }

    /// The field path, if the caller set one.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Renders the message by substituting every placeholder.
    ///
    /// Substitution is a single left-to-right pass: replaced text is never
    /// rescanned, and where two placeholders overlap the longer one wins.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_ref();

        while !rest.is_empty() {
            let hit = self
                .params
                .iter()
                .filter(|(k, _)| !k.is_empty() && rest.starts_with(k.as_ref()))
                .max_by_key(|(k, _)| k.len());

            if let Some((key, value)) = hit {
                out.push_str(value);
                rest = &rest[key.len()..];
                continue;
            }

            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }

        out
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.render())
        } else {
            write!(f, "{}: {}", self.code, self.render())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn render_without_params_returns_template() {
        let v = Violation::new("c", "nothing to replace");
        assert_eq!(v.render(), "nothing to replace");
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let v = Violation::new("c", "%a% and %b%")
            .with_param("%a%", "%b%")
            .with_param("%b%", "two");
        assert_eq!(v.render(), "%b% and two");
    }

    #[test]
    fn longest_placeholder_wins() {
        let v = Violation::new("c", "%value%s")
            .with_param("%value%", "long")
            .with_param("%v", "short");
        assert_eq!(v.render(), "longs");
    }

    #[test]
    fn render_handles_multibyte_text() {
        let v = Violation::new("c", "Hé %x% ✓").with_param("%x%", "ü");
        assert_eq!(v.render(), "Hé ü ✓");
    }

    #[test]
    fn display_includes_field_and_code() {
        let v = Violation::new("entity_exists", "taken: %value%")
            .with_param("%value%", "bob")
            .with_field("user.name");
        assert_eq!(v.to_string(), "[user.name] entity_exists: taken: bob");
    }

    #[test]
    fn serializes_template_and_params() {
        let v = Violation::new("entity_exists", "%value%")
            .with_param("%value%", "1")
            .with_invalid_value(json!(1));
        assert_eq!(
            serde_json::to_value(&v).unwrap_or_default(),
            json!({
                "code": "entity_exists",
                "template": "%value%",
                "params": [["%value%", "1"]],
                "invalid_value": 1,
            })
        );
    }
}
