//! The composite handle.

use core::any::Any;

use crate::error::TraitError;
use crate::identity::TraitIdentity;
use crate::meta_trait::MetaTrait;
use crate::recover::recover_trait;

/// A type whose trait slots can be looked up by name.
///
/// This is the only interface recovery depends on: it never inspects a
/// composite's concrete layout. `#[with_traits(...)]` implements it, but any
/// type may, which is how tests build handles with unusual shapes.
///
/// # Example
///
/// ```
/// use core::any::Any;
/// use strata_traits::{Composite, TraitIdentity};
///
/// struct Fixed {
///     abc: u32,
/// }
///
/// impl Composite for Fixed {
///     fn lookup_field(&self, name: &str) -> Option<&(dyn Any + Send + Sync)> {
///         match name {
///             "abc" => Some(&self.abc),
///             _ => None,
///         }
///     }
///
///     fn composes(&self) -> &[TraitIdentity] {
///         &[]
///     }
/// }
///
/// let fixed = Fixed { abc: 42 };
/// assert!(fixed.lookup_field("abc").is_some());
/// assert!(fixed.lookup_field("xyz").is_none());
/// ```
pub trait Composite: Send + Sync {
    /// Returns the value stored under `name`, or `None` for an unknown name.
    ///
    /// Must not panic: absence is an ordinary outcome.
    fn lookup_field(&self, name: &str) -> Option<&(dyn Any + Send + Sync)>;

    /// The traits this type declares it composes, in declaration order.
    fn composes(&self) -> &[TraitIdentity];

    /// Returns `true` if `identity` is part of [`composes`](Self::composes).
    fn declares(&self, identity: &TraitIdentity) -> bool {
        self.composes().contains(identity)
    }
}

/// Convenience methods on every [`Composite`].
pub trait CompositeExt: Composite {
    /// Recovers trait `T` from this composite.
    ///
    /// Equivalent to [`recover_trait::<T>(self)`](recover_trait).
    ///
    /// # Errors
    ///
    /// See [`recover_trait`].
    fn recover<T: MetaTrait>(&self) -> Result<T, TraitError>
    where
        Self: Sized,
    {
        recover_trait::<T>(self)
    }

    /// Returns `true` if trait `T` can be recovered from this composite.
    fn has_trait<T: MetaTrait>(&self) -> bool
    where
        Self: Sized,
    {
        recover_trait::<T>(self).is_ok()
    }
}

impl<C: Composite + ?Sized> CompositeExt for C {}
