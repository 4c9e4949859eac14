//! Expansion of `#[meta_trait]`.

use darling::FromMeta;
use darling::ast::NestedMeta;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use strata_decl::{ConstructorDecl, TRAIT_ANNOTATION, TraitPlan, TypeDecl, check_eligibility};
use strata_macro_utils::{StrataCrate, resolve_crate_path};
use syn::spanned::Spanned;
use syn::{ItemStruct, Path};

use crate::decl::{Annotated, classify, derive_default, field_ident, struct_decl, to_syn_error};

/// Arguments of `#[meta_trait(...)]`.
#[derive(Debug, Default, FromMeta)]
struct MetaTraitArgs {
    /// Zero-argument function building the default value.
    init: Option<Path>,
}

/// Name recorded for a struct built from an empty literal.
const LITERAL: &str = "literal";

/// Name recorded for a derived `Default`.
const DEFAULT: &str = "default";

/// How the default value is built.
enum Construct<'a> {
    Init(&'a Path),
    Default,
    Literal,
}

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match NestedMeta::parse_meta_list(attr) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    let args = match MetaTraitArgs::from_list(&args) {
        Ok(args) => args,
        Err(err) => return err.write_errors(),
    };

    try_expand(&args, item).unwrap_or_else(syn::Error::into_compile_error)
}

fn try_expand(args: &MetaTraitArgs, item: TokenStream) -> syn::Result<TokenStream> {
    let item = match classify(syn::parse2(item)?) {
        Annotated::Struct(item) => item,
        Annotated::Unsupported(decl, span) => {
            return Err(match check_eligibility(&decl) {
                Err(err) => to_syn_error(&err, span),
                Ok(_) => syn::Error::new(span, format!("{TRAIT_ANNOTATION} expects a struct")),
            });
        }
    };

    if !item.generics.params.is_empty() {
        return Err(syn::Error::new(
            item.generics.span(),
            format!("{TRAIT_ANNOTATION} does not support generic types"),
        ));
    }

    let (decl, chosen) = describe(&item, args);
    let plan = check_eligibility(&decl).map_err(|err| to_syn_error(&err, item.ident.span()))?;
    let construct = chosen
        .into_iter()
        .find(|(name, _)| *name == plan.constructor)
        .map(|(_, construct)| construct)
        .ok_or_else(|| syn::Error::new(item.ident.span(), "unresolved nullary constructor"))?;

    Ok(generate(&item, &plan, &construct))
}

/// Builds the declaration the eligibility check sees.
///
/// A struct offers a nullary constructor through `init = ...`, through
/// `#[derive(Default)]`, or, when it has neither, by having no fields.
fn describe<'a>(item: &ItemStruct, args: &'a MetaTraitArgs) -> (TypeDecl, Vec<(String, Construct<'a>)>) {
    let mut decl = struct_decl(item);
    let mut chosen = Vec::new();

    if let Some(init) = &args.init {
        let name = quote!(#init).to_string();
        decl = decl.with_constructor(ConstructorDecl::nullary(name.clone()));
        chosen.push((name, Construct::Init(init)));
    }
    if derive_default(&item.attrs).is_some() {
        decl = decl.with_constructor(ConstructorDecl::nullary(DEFAULT));
        chosen.push((DEFAULT.to_string(), Construct::Default));
    }
    if chosen.is_empty() && item.fields.is_empty() {
        decl = decl.with_constructor(ConstructorDecl::nullary(LITERAL));
        chosen.push((LITERAL.to_string(), Construct::Literal));
    }

    (decl, chosen)
}

fn generate(item: &ItemStruct, plan: &TraitPlan, construct: &Construct<'_>) -> TokenStream {
    let ts = resolve_crate_path(StrataCrate::Traits);
    let name = &item.ident;
    let vis = &item.vis;
    let identity = &plan.identity;
    let field = &plan.field_name;
    let field_ident = field_ident(&plan.field_name);
    let accessor = format_ident!("{}", plan.accessor_trait);

    let body = match construct {
        Construct::Init(path) if path.get_ident().is_some() => quote!(Self::#path()),
        Construct::Init(path) => quote!(#path()),
        Construct::Default => quote!(<Self as ::core::default::Default>::default()),
        Construct::Literal => quote!(Self {}),
    };

    let accessor_doc = format!("Access to the `{identity}` trait carried by a composite.");
    let getter_doc = format!("Returns the `{field}` slot.");

    quote! {
        #item

        impl #ts::MetaTrait for #name {
            const TRAIT: #ts::TraitIdentity = #ts::TraitIdentity::from_static(#identity);
            const FIELD: &'static str = #field;

            fn construct() -> Self {
                #body
            }
        }

        #[doc = #accessor_doc]
        #vis trait #accessor {
            #[doc = #getter_doc]
            fn #field_ident(&self) -> &#name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn eligible(item: ItemStruct, args: &MetaTraitArgs) -> Result<TraitPlan, strata_decl::DefinitionError> {
        let (decl, _) = describe(&item, args);
        check_eligibility(&decl)
    }

    #[test]
    fn derived_default_is_a_constructor() {
        let item: ItemStruct = parse_quote! {
            #[derive(Clone, Default)]
            struct Abc { abc: i32 }
        };
        let plan = eligible(item, &MetaTraitArgs::default()).unwrap();
        assert_eq!(plan.constructor, DEFAULT);
        assert_eq!(plan.field_name, "abc");
    }

    #[test]
    fn fieldless_struct_is_eligible() {
        let item: ItemStruct = parse_quote!(#[derive(Clone)] struct Fooer;);
        let plan = eligible(item, &MetaTraitArgs::default()).unwrap();
        assert_eq!(plan.constructor, LITERAL);
        assert_eq!(plan.accessor_trait, "WithFooer");
    }

    #[test]
    fn struct_with_fields_and_no_constructor_is_rejected() {
        let item: ItemStruct = parse_quote!(#[derive(Clone)] struct Abc { abc: i32 });
        let err = eligible(item, &MetaTraitArgs::default()).unwrap_err();
        assert!(err.to_string().contains("missing nullary constructor"));
    }

    #[test]
    fn init_and_derive_are_ambiguous() {
        let item: ItemStruct = parse_quote!(#[derive(Clone, Default)] struct Abc { abc: i32 });
        let args = MetaTraitArgs {
            init: Some(parse_quote!(new)),
        };
        let err = eligible(item, &args).unwrap_err();
        assert!(err.to_string().contains("ambiguous nullary constructor"));
    }

    #[test]
    fn expansion_rejects_enums() {
        let out = expand(TokenStream::new(), quote!(enum Mode { A })).to_string();
        assert!(out.contains("compile_error"));
        assert!(out.contains("can only be applied to a struct"));
    }

    #[test]
    fn expansion_emits_accessor_trait() {
        let out = expand(
            quote!(init = new),
            quote!(#[derive(Clone)] struct Abc { abc: i32 }),
        )
        .to_string()
        .replace(' ', "");
        assert!(out.contains("traitWithAbc"));
        assert!(out.contains("Self::new()"));
    }

    #[test]
    fn keyword_named_trait_gets_raw_getter() {
        let out = expand(
            TokenStream::new(),
            quote!(#[derive(Clone, Default)] struct Match;),
        )
        .to_string()
        .replace(' ', "");
        assert!(out.contains("fnr#match(&self)->&Match"));
        assert!(out.contains("constFIELD:&'staticstr=\"match\""));
    }

    #[test]
    fn reserved_named_trait_is_rejected() {
        let out = expand(TokenStream::new(), quote!(#[derive(Clone)] struct Crate;)).to_string();
        assert!(out.contains("compile_error"));
        assert!(out.contains("reserved keyword"));
    }
}
