//! Run-time recovery errors.

use thiserror::Error;

use crate::identity::TraitIdentity;

/// Why a trait could not be recovered from a composite.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraitErrorKind {
    /// The composite exposes no slot with the trait's field name.
    #[error("Failed to find property {field} in from")]
    NotFound {
        /// The slot name that was looked up.
        field: &'static str,
    },

    /// The slot exists but the composite does not declare the trait.
    ///
    /// Only produced under [`Verification::Declared`](crate::Verification::Declared).
    #[error("Property {field} is not declared by the composite")]
    NotDeclared {
        /// The slot name that was looked up.
        field: &'static str,
    },

    /// The slot exists but holds a value of another type.
    #[error("Property {field} is not of type {expected}")]
    TypeMismatch {
        /// The slot name that was looked up.
        field: &'static str,
        /// The trait that was requested.
        expected: TraitIdentity,
    },
}

/// Failure to recover a specific trait.
///
/// The error is attributed to the trait that was requested, so "recovering
/// `Abc` failed" and "recovering `Xyz` failed" can be told apart. Callers
/// usually treat both kinds as "this composite lacks the capability" and fall
/// back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("recovering trait {identity} failed: {kind}")]
pub struct TraitError {
    identity: TraitIdentity,
    kind: TraitErrorKind,
}

impl TraitError {
    /// Creates an error for the given trait.
    #[must_use]
    pub fn new(identity: TraitIdentity, kind: TraitErrorKind) -> Self {
        Self { identity, kind }
    }

    /// The slot was absent.
    #[must_use]
    pub fn not_found(identity: TraitIdentity, field: &'static str) -> Self {
        Self::new(identity, TraitErrorKind::NotFound { field })
    }

    /// The slot was present but not declared.
    #[must_use]
    pub fn not_declared(identity: TraitIdentity, field: &'static str) -> Self {
        Self::new(identity, TraitErrorKind::NotDeclared { field })
    }

    /// The slot held a value of the wrong type.
    #[must_use]
    pub fn type_mismatch(identity: TraitIdentity, field: &'static str) -> Self {
        let expected = identity.clone();
        Self::new(identity, TraitErrorKind::TypeMismatch { field, expected })
    }

    /// The trait whose recovery failed.
    #[must_use]
    pub fn trait_identity(&self) -> &TraitIdentity {
        &self.identity
    }

    /// The reason recovery failed.
    #[must_use]
    pub fn kind(&self) -> &TraitErrorKind {
        &self.kind
    }

    /// Returns `true` if the composite does not carry the trait at all.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            TraitErrorKind::NotFound { .. } | TraitErrorKind::NotDeclared { .. }
        )
    }

    /// Returns `true` if a same-named slot held another type.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, TraitErrorKind::TypeMismatch { .. })
    }
}

/// Errors returned by [`TraitRegistry`](crate::TraitRegistry) lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    /// No trait with this identity was registered.
    #[error("trait not registered: {0}")]
    Unregistered(String),

    /// The trait is registered but could not be recovered.
    #[error(transparent)]
    Trait(#[from] TraitError),
}
