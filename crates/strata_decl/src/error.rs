//! Definition-time errors.

use thiserror::Error;

/// Errors raised while validating a declaration.
///
/// Every variant names the offending type so that a declaration expander can
/// surface the diagnostic at the definition site. None of these are ever
/// recovered automatically: they halt processing of the declaration that
/// produced them without affecting unrelated definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The candidate type cannot become a trait.
    #[error("type `{type_name}` cannot be used as a trait: {reason}")]
    IneligibleTrait {
        /// Name of the rejected type.
        type_name: String,
        /// The violated rule, e.g. `"missing nullary constructor"`.
        reason: String,
    },

    /// Two composed traits derive the same slot name.
    #[error("type `{type_name}` composes more than one trait under the field `{field}`")]
    DuplicateTraitComposition {
        /// Name of the composite type.
        type_name: String,
        /// The conflicting derived field name.
        field: String,
    },

    /// A composition annotation has no trait argument.
    #[error("type `{type_name}` requires at least one trait argument")]
    MissingTraitArgument {
        /// Name of the composite type.
        type_name: String,
    },

    /// A composition argument is not shaped like `<Type>::TRAIT`.
    #[error("type `{type_name}` has malformed trait reference `{reference}`, expected `<Type>::TRAIT`")]
    MalformedTraitReference {
        /// Name of the composite type.
        type_name: String,
        /// The argument as written.
        reference: String,
    },

    /// The annotation was applied to something other than a struct.
    #[error("`{type_name}` is a {kind}, but {annotation} can only be applied to a struct")]
    UnsupportedDeclaration {
        /// Name of the annotated item.
        type_name: String,
        /// The kind of item that was found.
        kind: String,
        /// The annotation that was rejected.
        annotation: &'static str,
    },

    /// A derived slot name collides with a field the composite already declares.
    #[error("type `{type_name}` already declares a field named `{field}`")]
    FieldConflict {
        /// Name of the composite type.
        type_name: String,
        /// The colliding field name.
        field: String,
    },

    /// A trait type or trait identity was registered twice.
    #[error("trait `{trait_name}` is already registered")]
    DuplicateRegistration {
        /// Identity of the trait being registered.
        trait_name: String,
    },
}

impl DefinitionError {
    /// Creates an [`IneligibleTrait`](Self::IneligibleTrait).
    pub fn ineligible(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IneligibleTrait {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`MalformedTraitReference`](Self::MalformedTraitReference).
    pub fn malformed(type_name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::MalformedTraitReference {
            type_name: type_name.into(),
            reference: reference.into(),
        }
    }

    /// Creates a [`DuplicateRegistration`](Self::DuplicateRegistration).
    pub fn duplicate_registration(trait_name: impl Into<String>) -> Self {
        Self::DuplicateRegistration {
            trait_name: trait_name.into(),
        }
    }
}
