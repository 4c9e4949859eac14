//! Definition-time model for strata traits and composites.
//!
//! A declaration expander (the `#[meta_trait]` and `#[with_traits]` macros, or
//! any other code generator) reads an annotated item into a [`TypeDecl`] and
//! asks this crate what to generate:
//!
//! - [`check_eligibility`] - may this type become a trait?
//! - [`plan_composition`] - which slots does this composite get?
//! - [`field_name_for`] - the slot name derived from a trait type name
//!
//! Failures are [`DefinitionError`]s, which the expander must report as
//! definition failures rather than deferring them to run time.
//!
//! # Example
//!
//! ```
//! use strata_decl::{ConstructorDecl, TypeDecl, check_eligibility, plan_composition};
//!
//! let abc = TypeDecl::structure("Abc").with_constructor(ConstructorDecl::nullary("default"));
//! let plan = check_eligibility(&abc).unwrap();
//! assert_eq!(plan.field_name, "abc");
//!
//! let composite = TypeDecl::structure("Composite");
//! let slots = plan_composition(&composite, &["Abc::TRAIT".into()]).unwrap();
//! assert_eq!(slots.slots[0].field_name, "abc");
//! ```

mod decl;
mod error;
mod naming;
mod plan;

pub use decl::{ConstructorDecl, DeclKind, TraitRef, TypeDecl};
pub use error::DefinitionError;
pub use naming::{
    ACCESSOR_PREFIX, TRAIT_SUFFIX, accessor_trait_for, field_name_for, is_reserved_name,
    needs_raw_identifier,
};
pub use plan::{
    AMBIGUOUS_NULLARY, COMPOSE_ANNOTATION, CompositionPlan, MISSING_NULLARY, RESERVED_FIELD, SlotPlan,
    TRAIT_ANNOTATION, TraitPlan, check_eligibility, parse_trait_reference, plan_composition,
};
