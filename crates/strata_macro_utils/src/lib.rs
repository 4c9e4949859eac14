//! Shared utilities for strata procedural macro crates.
//!
//! Generated code names runtime items by absolute path. Which path is valid
//! depends on how the consumer reached the runtime crate: directly, under a
//! renamed dependency, or through the `strata` umbrella. [`resolve_crate_path`]
//! works that out from the consumer's manifest.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Package name of the umbrella crate.
const UMBRELLA: &str = "strata";

/// A strata crate that macro-generated code may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrataCrate {
    /// `strata_traits`, home of `MetaTrait` and `Composite`.
    Traits,
}

impl StrataCrate {
    /// The package name, which is also the name re-exported by the umbrella.
    pub fn package(self) -> &'static str {
        match self {
            Self::Traits => "strata_traits",
        }
    }
}

/// Returns the path generated code should use for `krate`.
///
/// A direct dependency wins, under whatever name the consumer gave it. Next
/// comes `<umbrella>::<package>` when the consumer depends on `strata`, or is
/// `strata` itself (its doctests and integration tests). Otherwise the bare
/// package name is emitted, so the resulting error names the missing crate.
pub fn resolve_crate_path(krate: StrataCrate) -> TokenStream {
    let package = format_ident!("{}", krate.package());

    if let Ok(found) = crate_name(krate.package()) {
        return match found {
            FoundCrate::Itself => quote!(#package),
            FoundCrate::Name(name) => {
                let name = format_ident!("{}", name);
                quote!(#name)
            }
        };
    }

    let umbrella = match crate_name(UMBRELLA) {
        Ok(FoundCrate::Name(name)) => name,
        Ok(FoundCrate::Itself) => UMBRELLA.to_string(),
        Err(_) => return quote!(#package),
    };
    let umbrella = format_ident!("{}", umbrella);
    quote!(::#umbrella::#package)
}
