//! Procedural macros for the `strata_traits` crate.
//!
//! Provides `#[meta_trait]` for declaring a struct as a reusable trait and
//! `#[with_traits(...)]` for composing traits into a struct. Both run the
//! definition-time checks from `strata_decl`, so an invalid declaration is a
//! compile error at the annotated item.
//!
//! # Example
//!
//! ```ignore
//! use strata_traits::{meta_trait, with_traits};
//!
//! #[meta_trait]
//! #[derive(Debug, Clone, Default)]
//! struct Fooer;
//!
//! #[with_traits(Fooer::TRAIT)]
//! struct SomethingThatHasFoo;
//!
//! let something = SomethingThatHasFoo::default();
//! let fooer: &Fooer = something.fooer();
//! ```

mod decl;
mod meta_trait;
mod with_traits;

use proc_macro::TokenStream;

/// Declares a struct as a trait that composites can carry.
///
/// The struct must have exactly one way to be built without arguments:
///
/// - `#[meta_trait(init = path)]`, naming a zero-argument function
/// - `#[derive(Default)]`
/// - no fields at all, when neither of the above is present
///
/// Anything else (an enum, a struct with fields and no constructor, or a
/// struct with both `init` and a derived `Default`) is rejected.
///
/// # Generated Code
///
/// For a struct like:
/// ```ignore
/// #[meta_trait(init = new)]
/// #[derive(Clone)]
/// struct Abc {
///     abc: i32,
/// }
/// ```
///
/// The macro generates:
/// ```ignore
/// impl MetaTrait for Abc {
///     const TRAIT: TraitIdentity = TraitIdentity::from_static("Abc");
///     const FIELD: &'static str = "abc";
///
///     fn construct() -> Self {
///         Self::new()
///     }
/// }
///
/// trait WithAbc {
///     fn abc(&self) -> &Abc;
/// }
/// ```
#[proc_macro_attribute]
pub fn meta_trait(attr: TokenStream, item: TokenStream) -> TokenStream {
    meta_trait::expand(attr.into(), item.into()).into()
}

/// Composes one or more traits into a struct.
///
/// Takes a list of `<Type>::TRAIT` references. Each trait becomes a field
/// named after it (`Abc` is stored as `abc`), initialised with the trait's
/// constructor. The struct gets:
///
/// - an implementation of `Composite`, so traits can be recovered by name
/// - an implementation of each trait's `With<Name>` accessor
/// - a `compose(..)` constructor taking the struct's own fields
/// - `Default`, when the struct has no fields of its own
///
/// Two traits deriving the same field name, a derived name colliding with an
/// existing field, or an argument not ending in `::TRAIT` are compile errors.
///
/// # Example
///
/// ```ignore
/// #[with_traits(Abc::TRAIT, Xyz::TRAIT)]
/// struct Composite {
///     id: u32,
/// }
///
/// let composite = Composite::compose(7);
/// assert_eq!(composite.abc(), &Abc::construct());
/// ```
#[proc_macro_attribute]
pub fn with_traits(attr: TokenStream, item: TokenStream) -> TokenStream {
    with_traits::expand(attr.into(), item.into()).into()
}
