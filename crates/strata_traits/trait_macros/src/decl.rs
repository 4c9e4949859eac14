//! Reading annotated items into [`TypeDecl`]s.

use proc_macro2::Span;
use strata_decl::{DeclKind, DefinitionError, TypeDecl, needs_raw_identifier};
use syn::punctuated::Punctuated;
use syn::{Attribute, Fields, Ident, Item, ItemStruct, Path, Token};

/// An annotated item after the shape check.
pub(crate) enum Annotated {
    /// A struct the annotation can work on.
    Struct(ItemStruct),
    /// Anything else, already described as a declaration.
    Unsupported(TypeDecl, Span),
}

/// Classifies the item an attribute macro was applied to.
pub(crate) fn classify(item: Item) -> Annotated {
    let (name, kind, span) = match item {
        Item::Struct(item) => return Annotated::Struct(item),
        Item::Enum(item) => (item.ident.to_string(), DeclKind::Enum, item.ident.span()),
        Item::Union(item) => (item.ident.to_string(), DeclKind::Union, item.ident.span()),
        Item::Fn(item) => (
            item.sig.ident.to_string(),
            DeclKind::Other("function".into()),
            item.sig.ident.span(),
        ),
        Item::Trait(item) => (
            item.ident.to_string(),
            DeclKind::Other("trait".into()),
            item.ident.span(),
        ),
        other => (
            String::from("item"),
            DeclKind::Other("non-struct item".into()),
            syn::spanned::Spanned::span(&other),
        ),
    };
    Annotated::Unsupported(TypeDecl::new(name, kind), span)
}

/// Builds the declaration of a struct: its name and declared field names.
///
/// Tuple structs with fields are reported as their own kind, since slots are
/// named fields.
pub(crate) fn struct_decl(item: &ItemStruct) -> TypeDecl {
    let kind = match &item.fields {
        Fields::Unnamed(fields) if !fields.unnamed.is_empty() => {
            DeclKind::Other("tuple struct".into())
        }
        _ => DeclKind::Struct,
    };

    let mut decl = TypeDecl::new(item.ident.to_string(), kind);
    decl.fields = item
        .fields
        .iter()
        .filter_map(|field| field.ident.as_ref().map(ToString::to_string))
        .collect();
    decl
}

/// Returns the `#[derive(Default)]` attribute, if present.
pub(crate) fn derive_default(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| {
        attr.path().is_ident("derive")
            && attr
                .parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)
                .is_ok_and(|paths| {
                    paths
                        .iter()
                        .any(|path| path.segments.last().is_some_and(|s| s.ident == "Default"))
                })
    })
}

/// Identifier for a derived field name, raw when the name is a keyword.
pub(crate) fn field_ident(name: &str) -> Ident {
    if needs_raw_identifier(name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}

/// Converts a definition error into a compile error at `span`.
pub(crate) fn to_syn_error(err: &DefinitionError, span: Span) -> syn::Error {
    syn::Error::new(span, err.to_string())
}
