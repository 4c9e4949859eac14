//! The trait contract and per-type descriptors.

use core::fmt;

use crate::composite::Composite;
use crate::error::TraitError;
use crate::identity::TraitIdentity;
use crate::recover::recover_trait;

/// A reusable capability that composites can carry.
///
/// Usually implemented with `#[meta_trait]`, which checks at definition time
/// that the type has a usable nullary constructor. A manual implementation
/// must keep [`FIELD`](Self::FIELD) equal to the lower-first form of
/// [`TRAIT`](Self::TRAIT); [`TraitRegistry::register`](crate::TraitRegistry::register)
/// rejects types that do not.
///
/// # Example
///
/// ```
/// use strata_traits::{MetaTrait, TraitIdentity};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Abc {
///     abc: i32,
/// }
///
/// impl MetaTrait for Abc {
///     const TRAIT: TraitIdentity = TraitIdentity::from_static("Abc");
///     const FIELD: &'static str = "abc";
///
///     fn construct() -> Self {
///         Abc { abc: 42 }
///     }
/// }
///
/// assert_eq!(Abc::construct(), Abc { abc: 42 });
/// ```
pub trait MetaTrait: Clone + Send + Sync + 'static {
    /// The trait identity: the declared type name.
    const TRAIT: TraitIdentity;

    /// The slot name composites store this trait under.
    const FIELD: &'static str;

    /// Builds the default value placed in each composite slot.
    fn construct() -> Self;

    /// Recovers this trait from a composite.
    ///
    /// # Errors
    ///
    /// See [`recover_trait`].
    fn recover(from: &dyn Composite) -> Result<Self, TraitError> {
        recover_trait::<Self>(from)
    }
}

/// Stateless factory bundle for a trait type.
///
/// Obtained from [`TraitDescriptor::of`] or returned by
/// [`TraitRegistry::register`](crate::TraitRegistry::register).
pub struct TraitDescriptor<T: MetaTrait> {
    identity: TraitIdentity,
    field_name: &'static str,
    construct: fn() -> T,
    recover: fn(&dyn Composite) -> Result<T, TraitError>,
}

impl<T: MetaTrait> TraitDescriptor<T> {
    /// Returns the descriptor for `T`.
    #[must_use]
    pub fn of() -> Self {
        Self {
            identity: T::TRAIT,
            field_name: T::FIELD,
            construct: T::construct,
            recover: T::recover,
        }
    }

    /// The trait identity.
    #[must_use]
    pub fn identity(&self) -> &TraitIdentity {
        &self.identity
    }

    /// The slot name.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// Invokes the nullary constructor.
    #[must_use]
    pub fn construct(&self) -> T {
        (self.construct)()
    }

    /// Recovers `T` from `from`.
    ///
    /// # Errors
    ///
    /// See [`recover_trait`].
    pub fn recover(&self, from: &dyn Composite) -> Result<T, TraitError> {
        (self.recover)(from)
    }
}

impl<T: MetaTrait> Clone for TraitDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            identity: self.identity.clone(),
            field_name: self.field_name,
            construct: self.construct,
            recover: self.recover,
        }
    }
}

impl<T: MetaTrait> fmt::Debug for TraitDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraitDescriptor")
            .field("identity", &self.identity)
            .field("field_name", &self.field_name)
            .field("type_name", &core::any::type_name::<T>())
            .finish()
    }
}
