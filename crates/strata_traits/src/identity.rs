//! Trait identities.

use core::borrow::Borrow;
use core::fmt;
use std::borrow::Cow;

use strata_decl::field_name_for;

/// The name of a trait type.
///
/// Identities compare, hash and print by the wrapped name. Trait types carry
/// theirs as [`MetaTrait::TRAIT`](crate::MetaTrait::TRAIT), built at compile
/// time with [`TraitIdentity::from_static`].
///
/// # Example
///
/// ```
/// use strata_traits::TraitIdentity;
///
/// let id = TraitIdentity::of("Abc");
/// assert_eq!(id.description(), "Abc");
/// assert_eq!(id, TraitIdentity::from_static("Abc"));
/// assert_eq!(id.field_name(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TraitIdentity(Cow<'static, str>);

impl TraitIdentity {
    /// Creates an identity from a static name. Usable in constants.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates an identity from any name. The empty name is accepted.
    #[must_use]
    pub fn of(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the wrapped name verbatim.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.0
    }

    /// Returns the slot name composites use for this trait.
    #[must_use]
    pub fn field_name(&self) -> String {
        field_name_for(&self.0)
    }
}

impl fmt::Display for TraitIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TraitIdentity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TraitIdentity {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for TraitIdentity {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}
