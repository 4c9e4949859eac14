//! Validation of trait and composite declarations.
//!
//! The two entry points, [`check_eligibility`] and [`plan_composition`], are
//! pure functions from a [`TypeDecl`] to the members an expander must
//! generate. They never look at syntax; the expander owns parsing and output.

use crate::decl::{DeclKind, TraitRef, TypeDecl};
use crate::error::DefinitionError;
use crate::naming::{
    TRAIT_SUFFIX, accessor_trait_for, field_name_for, is_identifier, is_reserved_name,
};

/// Annotation that turns a struct into a trait.
pub const TRAIT_ANNOTATION: &str = "#[meta_trait]";

/// Annotation that composes traits into a struct.
pub const COMPOSE_ANNOTATION: &str = "#[with_traits]";

/// Reason given when no usable constructor exists.
pub const MISSING_NULLARY: &str = "missing nullary constructor";

/// Reason given when more than one usable constructor exists.
pub const AMBIGUOUS_NULLARY: &str = "ambiguous nullary constructor";

/// Reason given when the derived slot name is a keyword that cannot be an
/// identifier, e.g. `Crate` -> `crate`.
pub const RESERVED_FIELD: &str = "derived field name is a reserved keyword";

/// Members to generate for an eligible trait type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitPlan {
    /// The trait identity, equal to the declared type name.
    pub identity: String,
    /// The slot name composites use for this trait.
    pub field_name: String,
    /// Name of the peer accessor trait.
    pub accessor_trait: String,
    /// The constructor used to build the default value.
    pub constructor: String,
}

/// One trait slot on a composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPlan {
    /// The generated field name.
    pub field_name: String,
    /// Path of the trait type as written, without the `::TRAIT` suffix.
    pub trait_path: String,
    /// Last segment of `trait_path`.
    pub trait_name: String,
    /// Path of the trait's accessor trait.
    pub accessor_trait_path: String,
}

/// Members to generate for a composite type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionPlan {
    /// The composite type name.
    pub type_name: String,
    /// Slots in declaration order.
    pub slots: Vec<SlotPlan>,
}

impl CompositionPlan {
    /// Returns the slot for the given field name.
    #[must_use]
    pub fn slot(&self, field_name: &str) -> Option<&SlotPlan> {
        self.slots.iter().find(|slot| slot.field_name == field_name)
    }
}

fn require_struct(decl: &TypeDecl, annotation: &'static str) -> Result<(), DefinitionError> {
    if decl.kind == DeclKind::Struct {
        return Ok(());
    }
    Err(DefinitionError::UnsupportedDeclaration {
        type_name: decl.name.clone(),
        kind: decl.kind.to_string(),
        annotation,
    })
}

/// Checks that `decl` may become a trait.
///
/// A trait type must be a struct exposing exactly one zero-argument,
/// non-failable constructor.
///
/// # Errors
///
/// - [`DefinitionError::UnsupportedDeclaration`] if `decl` is not a struct
/// - [`DefinitionError::IneligibleTrait`] if there is no usable constructor,
///   or more than one, or if the derived field name can never be an
///   identifier
pub fn check_eligibility(decl: &TypeDecl) -> Result<TraitPlan, DefinitionError> {
    require_struct(decl, TRAIT_ANNOTATION)?;

    let field_name = field_name_for(&decl.name);
    if is_reserved_name(&field_name) {
        return Err(DefinitionError::ineligible(&decl.name, RESERVED_FIELD));
    }

    let mut applicable = decl
        .constructors
        .iter()
        .filter(|ctor| ctor.is_applicable_nullary());

    let Some(constructor) = applicable.next() else {
        return Err(DefinitionError::ineligible(&decl.name, MISSING_NULLARY));
    };
    if applicable.next().is_some() {
        return Err(DefinitionError::ineligible(&decl.name, AMBIGUOUS_NULLARY));
    }

    Ok(TraitPlan {
        identity: decl.name.clone(),
        field_name,
        accessor_trait: accessor_trait_for(&decl.name),
        constructor: constructor.name.clone(),
    })
}

/// Resolves a `<Type>::TRAIT` reference to the type path.
///
/// `type_name` is the composite being defined and only appears in errors.
///
/// # Errors
///
/// - [`DefinitionError::MissingTraitArgument`] if the reference is empty
/// - [`DefinitionError::MalformedTraitReference`] if it does not end in
///   `::TRAIT` or the type path is not a plain path
pub fn parse_trait_reference(type_name: &str, reference: &TraitRef) -> Result<String, DefinitionError> {
    let compact: String = reference.path.split_whitespace().collect();
    if compact.is_empty() {
        return Err(DefinitionError::MissingTraitArgument {
            type_name: type_name.to_string(),
        });
    }

    let Some(path) = compact.strip_suffix(TRAIT_SUFFIX) else {
        return Err(DefinitionError::malformed(type_name, &reference.path));
    };

    // A leading `::` is allowed, every other segment must be an identifier.
    let segments = path.strip_prefix("::").unwrap_or(path);
    if segments.is_empty() || !segments.split("::").all(is_identifier) {
        return Err(DefinitionError::malformed(type_name, &reference.path));
    }

    Ok(path.to_string())
}

fn slot_for(path: String) -> SlotPlan {
    let (prefix, trait_name) = match path.rfind("::") {
        Some(idx) => (&path[..idx + 2], &path[idx + 2..]),
        None => ("", path.as_str()),
    };
    let field_name = field_name_for(trait_name);
    let accessor_trait_path = format!("{prefix}{}", accessor_trait_for(trait_name));
    let trait_name = trait_name.to_string();

    SlotPlan {
        field_name,
        trait_path: path,
        trait_name,
        accessor_trait_path,
    }
}

/// Plans the slots a composite gets for the given trait references.
///
/// References are processed in order; the order only affects field order.
///
/// # Errors
///
/// - [`DefinitionError::UnsupportedDeclaration`] if `decl` is not a struct
/// - [`DefinitionError::MissingTraitArgument`] if `traits` is empty
/// - [`DefinitionError::MalformedTraitReference`] for a badly shaped reference
/// - [`DefinitionError::DuplicateTraitComposition`] if two references derive
///   the same field name
/// - [`DefinitionError::FieldConflict`] if a derived name is already a field
/// - [`DefinitionError::IneligibleTrait`] if a derived name can never be an
///   identifier
pub fn plan_composition(
    decl: &TypeDecl,
    traits: &[TraitRef],
) -> Result<CompositionPlan, DefinitionError> {
    require_struct(decl, COMPOSE_ANNOTATION)?;

    if traits.is_empty() {
        return Err(DefinitionError::MissingTraitArgument {
            type_name: decl.name.clone(),
        });
    }

    let mut slots: Vec<SlotPlan> = Vec::with_capacity(traits.len());
    for reference in traits {
        let slot = slot_for(parse_trait_reference(&decl.name, reference)?);

        if is_reserved_name(&slot.field_name) {
            return Err(DefinitionError::ineligible(slot.trait_name, RESERVED_FIELD));
        }

        if slots.iter().any(|s| s.field_name == slot.field_name) {
            return Err(DefinitionError::DuplicateTraitComposition {
                type_name: decl.name.clone(),
                field: slot.field_name,
            });
        }
        if decl.has_field(&slot.field_name) {
            return Err(DefinitionError::FieldConflict {
                type_name: decl.name.clone(),
                field: slot.field_name,
            });
        }
        slots.push(slot);
    }

    Ok(CompositionPlan {
        type_name: decl.name.clone(),
        slots,
    })
}
