//! Dynamic capability lookup.

use crate::composite::Composite;
use crate::error::TraitError;
use crate::meta_trait::MetaTrait;

/// Recovers trait `T` from any composite.
///
/// Looks up the slot named [`T::FIELD`](MetaTrait::FIELD) and checks that it
/// holds a `T`. Matching is structural: a handle exposing a same-named,
/// same-typed slot satisfies recovery whether or not it declares `T`. Use
/// [`recover_declared`] to also require the declaration.
///
/// The returned value is a clone; the composite is never modified.
///
/// # Errors
///
/// - [`TraitErrorKind::NotFound`](crate::TraitErrorKind::NotFound) if the
///   handle has no slot with that name
/// - [`TraitErrorKind::TypeMismatch`](crate::TraitErrorKind::TypeMismatch) if
///   the slot holds another type
///
/// # Example
///
/// ```
/// use strata_traits::{meta_trait, recover_trait, with_traits};
///
/// #[meta_trait(init = new)]
/// #[derive(Debug, Clone, PartialEq)]
/// struct Abc {
///     abc: i32,
/// }
///
/// impl Abc {
///     fn new() -> Self {
///         Abc { abc: 42 }
///     }
/// }
///
/// #[with_traits(Abc::TRAIT)]
/// struct Composite;
///
/// let composite = Composite::default();
/// assert_eq!(recover_trait::<Abc>(&composite), Ok(Abc { abc: 42 }));
/// ```
pub fn recover_trait<T: MetaTrait>(from: &dyn Composite) -> Result<T, TraitError> {
    let field = T::FIELD;

    let Some(value) = from.lookup_field(field) else {
        tracing::trace!(trait_name = %T::TRAIT, field, "trait slot not found");
        return Err(TraitError::not_found(T::TRAIT, field));
    };

    let Some(value) = value.downcast_ref::<T>() else {
        tracing::trace!(
            trait_name = %T::TRAIT,
            field,
            expected = core::any::type_name::<T>(),
            "trait slot holds another type"
        );
        return Err(TraitError::type_mismatch(T::TRAIT, field));
    };

    tracing::trace!(trait_name = %T::TRAIT, field, "trait recovered");
    Ok(value.clone())
}

/// Recovers trait `T`, requiring the composite to declare it.
///
/// Like [`recover_trait`], but a slot that matches only by name and type is
/// rejected unless [`Composite::composes`] lists `T`.
///
/// # Errors
///
/// - [`TraitErrorKind::NotDeclared`](crate::TraitErrorKind::NotDeclared) if
///   `T` is not declared
/// - otherwise the errors of [`recover_trait`]
pub fn recover_declared<T: MetaTrait>(from: &dyn Composite) -> Result<T, TraitError> {
    if !from.declares(&T::TRAIT) {
        tracing::trace!(trait_name = %T::TRAIT, "trait not declared by composite");
        return Err(TraitError::not_declared(T::TRAIT, T::FIELD));
    }
    recover_trait::<T>(from)
}
