//! Composable traits for Rust structs, recoverable by name at run time.
//!
//! Declare a struct as a trait with `#[meta_trait]`, compose it into other
//! structs with `#[with_traits(...)]`, then recover it from any composite
//! with [`recover_trait`](strata_traits::recover_trait).
//!
//! ```
//! use strata::prelude::*;
//!
//! #[meta_trait]
//! #[derive(Debug, Clone, PartialEq)]
//! struct Fooer;
//!
//! #[with_traits(Fooer::TRAIT)]
//! struct SomethingThatHasFoo;
//!
//! let something = SomethingThatHasFoo::default();
//! assert_eq!(recover_trait::<Fooer>(&something), Ok(Fooer));
//! ```

pub use strata_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use strata_internal::prelude::*;
}
