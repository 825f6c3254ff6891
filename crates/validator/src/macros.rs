//! Declaration macro.

/// Declares an [`EntityNotExist`](crate::EntityNotExist) constraint with
/// named parameters.
///
/// `entity` is required; `property` defaults to `"id"` and `message` to
/// [`DEFAULT_MESSAGE`](crate::DEFAULT_MESSAGE). The expansion is a const
/// expression, so it can initialise `static` and `const` registration
/// tables.
///
/// # Examples
///
/// ```
/// use warden_validator::{entity_not_exist, EntityNotExist};
///
/// struct Signup;
///
/// impl Signup {
///     const CONSTRAINTS: &'static [(&'static str, EntityNotExist)] = &[
///         ("user", entity_not_exist!(entity: "App\\Entity\\User", property: "uuid")),
///         ("email", entity_not_exist!(entity: "App\\Entity\\User", property: "email",
///             message: "%value% is already registered")),
///     ];
/// }
///
/// let (field, rule) = &Signup::CONSTRAINTS[0];
/// assert_eq!(*field, "user");
/// assert_eq!(rule.property(), "uuid");
/// ```
#[macro_export]
macro_rules! entity_not_exist {
    (
        entity: $entity:expr
        $(, property: $property:expr)?
        $(, message: $message:expr)?
        $(,)?
    ) => {
        $crate::EntityNotExist::from_static(
            $entity,
            $crate::entity_not_exist!(@or $($property)?, $crate::DEFAULT_PROPERTY),
            $crate::entity_not_exist!(@or $($message)?, $crate::DEFAULT_MESSAGE),
        )
    };

    (@or , $default:expr) => {
        $default
    };
    (@or $value:expr, $default:expr) => {
        $value
    };
}
