//! Composable traits with name-based runtime recovery.
//!
//! A *trait* here is a plain struct declared reusable with [`macro@meta_trait`].
//! A *composite* is a struct that carries one or more traits as named slots,
//! declared with [`macro@with_traits`]. Any code holding a composite, through
//! nothing more than the [`Composite`] handle, can ask for a trait back:
//!
//! - [`identity`] - [`TraitIdentity`], the comparable name of a trait
//! - [`mod@meta_trait`] - the [`MetaTrait`] contract and [`TraitDescriptor`]
//! - [`composite`] - the [`Composite`] handle
//! - [`recover`] - [`recover_trait`], the dynamic lookup
//! - [`registry`] - [`TraitRegistry`], recovery by name and capability listing
//!
//! Definition-time checks (eligibility, duplicate slots, malformed arguments)
//! live in [`strata_decl`] and run inside the macros, so a bad declaration
//! fails to compile instead of failing at run time.
//!
//! # Example
//!
//! ```
//! use strata_traits::prelude::*;
//!
//! #[meta_trait(init = new)]
//! #[derive(Debug, Clone, PartialEq)]
//! struct Abc {
//!     abc: i32,
//! }
//!
//! impl Abc {
//!     fn new() -> Self {
//!         Abc { abc: 42 }
//!     }
//! }
//!
//! #[meta_trait]
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Xyz;
//!
//! #[with_traits(Abc::TRAIT)]
//! struct HasAbc {
//!     id: u32,
//! }
//!
//! let value = HasAbc::compose(7);
//! assert_eq!(value.abc(), &Abc { abc: 42 });
//! assert_eq!(recover_trait::<Abc>(&value), Ok(Abc { abc: 42 }));
//! assert!(recover_trait::<Xyz>(&value).unwrap_err().is_not_found());
//! ```

// Lets macro-generated `strata_traits::` paths resolve inside this crate.
extern crate self as strata_traits;

/// Composite handle.
pub mod composite;

/// Recovery errors.
pub mod error;

/// Trait identities.
pub mod identity;

/// Trait contract and descriptors.
pub mod meta_trait;

/// Dynamic capability lookup.
pub mod recover;

/// Process-wide trait registry.
pub mod registry;

#[doc(hidden)]
pub mod __private;

pub use composite::{Composite, CompositeExt};
pub use error::{RecoveryError, TraitError, TraitErrorKind};
pub use identity::TraitIdentity;
pub use meta_trait::{MetaTrait, TraitDescriptor};
pub use recover::{recover_declared, recover_trait};
pub use registry::{BoxedTrait, ErasedDescriptor, RegistryConfig, TraitRegistry, Verification};
pub use strata_decl::DefinitionError;

/// Re-export the attribute macros.
pub use strata_trait_macros::{meta_trait, with_traits};

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::composite::*;
    pub use crate::error::*;
    pub use crate::identity::*;
    pub use crate::meta_trait::*;
    pub use crate::recover::*;
    pub use crate::registry::*;
    pub use strata_decl::DefinitionError;
    pub use strata_trait_macros::{meta_trait, with_traits};
}
