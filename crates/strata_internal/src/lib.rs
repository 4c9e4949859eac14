//! # Strata Internal Library
//!
//! Re-exports the core strata crates for convenience.

/// Definition-time declaration model and checks.
pub use strata_decl;

/// Runtime traits, composites and recovery.
pub use strata_traits;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use strata_decl::DefinitionError;
    pub use strata_traits::prelude::*;
}
