//! Integration tests for `EntityNotExistValidator` against a mocked lookup.

use std::any::Any;
use std::sync::Arc;

use mockall::mock;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use warden_validator::prelude::*;

mock! {
    pub Lookup {}

    impl EntityLookup for Lookup {
        fn find_one_by(&self, entity: &str, criteria: &Criteria) -> Result<Option<Value>, LookupError>;
    }
}

const USER: &str = "App\\Entity\\User";

fn validator(lookup: MockLookup) -> EntityNotExistValidator {
    EntityNotExistValidator::new(Arc::new(lookup))
}

fn expect_lookup(
    lookup: &mut MockLookup,
    property: &'static str,
    value: Value,
    result: Option<Value>,
) {
    lookup
        .expect_find_one_by()
        .withf(move |entity, criteria| {
            entity == USER && criteria.property() == property && criteria.value() == &value
        })
        .times(1)
        .return_once(move |_, _| Ok(result));
}

/// A constraint of another kind.
#[derive(Debug)]
struct NotNull;

impl Constraint for NotNull {
    fn name(&self) -> &'static str {
        "NotNull"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

#[test]
fn wrong_constraint_is_a_configuration_error() {
    let mut lookup = MockLookup::new();
    lookup.expect_find_one_by().never();

    let err = validator(lookup).validate(&json!("foo"), &NotNull).unwrap_err();

    assert!(err.is_configuration());
    assert!(matches!(
        err,
        ConstraintError::UnexpectedConstraint { expected: "EntityNotExist", .. }
    ));
    assert_eq!(
        err.to_string(),
        "you can only pass EntityNotExist constraint to this validator, got NotNull"
    );
}

#[test]
fn empty_entity_fails_before_lookup() {
    let mut lookup = MockLookup::new();
    lookup.expect_find_one_by().never();

    let err = validator(lookup)
        .validate(&json!("foobar"), &EntityNotExist::new(""))
        .unwrap_err();

    assert!(matches!(err, ConstraintError::MissingEntity { .. }));
    assert!(err.is_configuration());
}

#[test]
fn empty_property_fails_before_lookup() {
    let mut lookup = MockLookup::new();
    lookup.expect_find_one_by().never();

    let err = validator(lookup)
        .validate(&json!("foobar"), &EntityNotExist::new(USER).with_property(""))
        .unwrap_err();

    assert!(matches!(err, ConstraintError::MissingProperty { .. }));
    assert!(err.is_configuration());
}

#[test]
fn object_value_fails_before_lookup() {
    let mut lookup = MockLookup::new();
    lookup.expect_find_one_by().never();

    let err = validator(lookup)
        .validate(&json!({"id": 1}), &EntityNotExist::new(USER))
        .unwrap_err();

    assert_eq!(err.code(), "CONSTRAINT_UNSUPPORTED_VALUE");
}

// ============================================================================
// SHORT-CIRCUIT
// ============================================================================

#[rstest]
#[case::empty_string(json!(""))]
#[case::null(json!(null))]
fn blank_value_skips_lookup(#[case] value: Value) {
    let mut lookup = MockLookup::new();
    lookup.expect_find_one_by().never();

    let result = validator(lookup)
        .validate(&value, &EntityNotExist::new(USER))
        .unwrap();

    assert_eq!(result, None);
}

// ============================================================================
// LOOKUP
// ============================================================================

#[test]
fn absent_entity_passes() {
    let mut lookup = MockLookup::new();
    expect_lookup(&mut lookup, "id", json!("foobar"), None);

    let result = validator(lookup)
        .validate(&json!("foobar"), &EntityNotExist::new(USER))
        .unwrap();

    assert_eq!(result, None);
}

#[test]
fn custom_property_is_used_as_lookup_key() {
    let mut lookup = MockLookup::new();
    expect_lookup(&mut lookup, "uuid", json!("foobar"), None);

    let result = validator(lookup)
        .validate(&json!("foobar"), &EntityNotExist::new(USER).with_property("uuid"))
        .unwrap();

    assert_eq!(result, None);
}

#[test]
fn existing_entity_produces_one_violation() {
    let mut lookup = MockLookup::new();
    expect_lookup(
        &mut lookup,
        "id",
        json!("foobar"),
        Some(json!({"id": "foobar"})),
    );

    let violation = validator(lookup)
        .validate(&json!("foobar"), &EntityNotExist::new(USER))
        .unwrap()
        .expect("existing entity must be reported");

    assert_eq!(
        violation.params().collect::<Vec<_>>(),
        vec![
            ("%entity%", USER),
            ("%property%", "id"),
            ("%value%", "foobar"),
        ]
    );
    assert_eq!(
        violation.render(),
        r#"Entity "App\Entity\User" with property "id": "foobar" does exist."#
    );
}

#[rstest]
#[case::integer(json!(1), "1")]
#[case::negative(json!(-15), "-15")]
#[case::float(json!(2.5), "2.5")]
#[case::boolean(json!(true), "true")]
fn scalar_values_are_coerced_to_strings(#[case] value: Value, #[case] expected: &str) {
    let mut lookup = MockLookup::new();
    lookup
        .expect_find_one_by()
        .times(1)
        .return_once(|_, _| Ok(Some(json!("my_user"))));

    let violation = validator(lookup)
        .validate(&value, &EntityNotExist::new(USER))
        .unwrap()
        .expect("existing entity must be reported");

    assert_eq!(violation.param("%value%"), Some(expected));
    assert_eq!(violation.invalid_value(), &value);
}

#[test]
fn lookup_error_propagates_unchanged() {
    let mut lookup = MockLookup::new();
    lookup.expect_find_one_by().times(1).return_once(|_, _| {
        Err(LookupError::backend(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "database unreachable",
        )))
    });

    let err = validator(lookup)
        .validate(&json!("foobar"), &EntityNotExist::new(USER))
        .unwrap_err();

    assert!(!err.is_configuration());
    assert_eq!(err.to_string(), "lookup backend failed: database unreachable");
}

// ============================================================================
// DECLARATION SURFACES
// ============================================================================

struct EntityDummy;

impl EntityDummy {
    const CONSTRAINTS: &'static [(&'static str, EntityNotExist)] =
        &[("user", entity_not_exist!(entity: USER, property: "uuid"))];

    fn constraint_for(field: &str) -> Option<&'static EntityNotExist> {
        Self::CONSTRAINTS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, c)| c)
    }
}

#[test]
fn declaration_from_registration_table() {
    let mut lookup = MockLookup::new();
    expect_lookup(&mut lookup, "uuid", json!("foobar"), None);

    let constraint = EntityDummy::constraint_for("user").expect("field is registered");
    let result = validator(lookup).validate(&json!("foobar"), constraint).unwrap();

    assert_eq!(result, None);
}

#[test]
fn declaration_from_json_config() {
    let mut lookup = MockLookup::new();
    expect_lookup(&mut lookup, "uuid", json!("foobar"), Some(json!({})));

    let constraint =
        EntityNotExist::from_json(&format!(r#"{{"entity": {USER:?}, "property": "uuid"}}"#))
            .unwrap();
    let violation = validator(lookup)
        .validate(&json!("foobar"), &constraint)
        .unwrap()
        .expect("existing entity must be reported");

    assert_eq!(violation.param("%property%"), Some("uuid"));
}

// ============================================================================
// IN-MEMORY LOOKUP
// ============================================================================

#[test]
fn in_memory_unknown_entity_surfaces_as_lookup_error() {
    let validator = EntityNotExistValidator::new(Arc::new(InMemoryLookup::new()));

    let err = validator
        .validate(&json!("foobar"), &EntityNotExist::new("Ghost"))
        .unwrap_err();

    assert!(matches!(
        err,
        ConstraintError::Lookup(LookupError::UnknownEntity { ref entity }) if entity == "Ghost"
    ));
}

#[test]
fn in_memory_numeric_id_matches_string_candidate() {
    let lookup = Arc::new(InMemoryLookup::new());
    lookup.insert("User", json!({"id": 42, "name": "ada"}));
    let validator = EntityNotExistValidator::new(lookup);

    let violation = validator
        .validate(&json!("42"), &EntityNotExist::new("User"))
        .unwrap();

    assert!(violation.is_some());
}

#[test]
fn validator_is_shareable_across_threads() {
    let lookup = Arc::new(InMemoryLookup::new());
    lookup.insert("User", json!({"id": 1}));
    let validator = EntityNotExistValidator::new(lookup);
    let rule = EntityNotExist::new("User");

    std::thread::scope(|s| {
        for id in 0..4 {
            let (validator, rule) = (&validator, &rule);
            s.spawn(move || {
                let result = validator.validate(&json!(id), rule).unwrap();
                assert_eq!(result.is_some(), id == 1);
            });
        }
    });
}
