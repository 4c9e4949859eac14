//! Expansion of `#[with_traits(...)]`.

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use strata_decl::{
    COMPOSE_ANNOTATION, CompositionPlan, DefinitionError, TraitRef, plan_composition,
};
use strata_macro_utils::{StrataCrate, resolve_crate_path};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, Field, Fields, FieldsNamed, Ident, ItemStruct, Path, Token, Type};

use crate::decl::{
    Annotated, classify, derive_default, field_ident, struct_decl, to_syn_error,
};

/// A slot resolved back into syntax.
struct Slot {
    ident: Ident,
    field: String,
    trait_path: Path,
    accessor_path: Path,
}

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    try_expand(attr, item).unwrap_or_else(syn::Error::into_compile_error)
}

fn try_expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let args = Punctuated::<Expr, Token![,]>::parse_terminated.parse2(attr)?;
    let refs: Vec<TraitRef> = args
        .iter()
        .map(|arg| TraitRef::new(arg.to_token_stream().to_string()))
        .collect();

    let mut item = match classify(syn::parse2(item)?) {
        Annotated::Struct(item) => item,
        Annotated::Unsupported(decl, span) => {
            return Err(match plan_composition(&decl, &refs) {
                Err(err) => to_syn_error(&err, span),
                Ok(_) => syn::Error::new(span, format!("{COMPOSE_ANNOTATION} expects a struct")),
            });
        }
    };

    let decl = struct_decl(&item);
    let plan = plan_composition(&decl, &refs).map_err(|err| {
        let span = match err {
            DefinitionError::MissingTraitArgument { .. }
            | DefinitionError::MalformedTraitReference { .. }
            | DefinitionError::DuplicateTraitComposition { .. } => Span::call_site(),
            _ => item.ident.span(),
        };
        to_syn_error(&err, span)
    })?;

    let user_fields: Vec<(Ident, Type)> = item
        .fields
        .iter()
        .filter_map(|field| field.ident.clone().map(|ident| (ident, field.ty.clone())))
        .collect();

    if user_fields.is_empty()
        && let Some(attr) = derive_default(&item.attrs)
    {
        return Err(syn::Error::new_spanned(
            attr,
            format!("{COMPOSE_ANNOTATION} already implements `Default` for this type"),
        ));
    }

    let slots = resolve_slots(&plan)?;
    append_slots(&mut item, &slots)?;

    Ok(generate(&item, &user_fields, &slots))
}

fn resolve_slots(plan: &CompositionPlan) -> syn::Result<Vec<Slot>> {
    plan.slots
        .iter()
        .map(|slot| {
            Ok(Slot {
                ident: field_ident(&slot.field_name),
                field: slot.field_name.clone(),
                trait_path: syn::parse_str(&slot.trait_path)?,
                accessor_path: syn::parse_str(&slot.accessor_trait_path)?,
            })
        })
        .collect()
}

/// Adds one field per slot, turning unit structs into braced ones.
fn append_slots(item: &mut ItemStruct, slots: &[Slot]) -> syn::Result<()> {
    let vis = &item.vis;
    let mut fields = Vec::with_capacity(slots.len());
    for slot in slots {
        let Slot {
            ident, trait_path, ..
        } = slot;
        let doc = format!("The `{}` trait slot.", slot.field);
        fields.push(Field::parse_named.parse2(quote! {
            #[doc = #doc]
            #vis #ident: #trait_path
        })?);
    }

    match &mut item.fields {
        Fields::Named(named) => named.named.extend(fields),
        Fields::Unit | Fields::Unnamed(_) => {
            let mut named: FieldsNamed = syn::parse_quote!({});
            named.named.extend(fields);
            item.fields = Fields::Named(named);
            item.semi_token = None;
        }
    }
    Ok(())
}

fn generate(item: &ItemStruct, user_fields: &[(Ident, Type)], slots: &[Slot]) -> TokenStream {
    let ts = resolve_crate_path(StrataCrate::Traits);
    let name = &item.ident;
    let vis = &item.vis;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let slot_idents: Vec<_> = slots.iter().map(|slot| &slot.ident).collect();
    let slot_names: Vec<_> = slots.iter().map(|slot| &slot.field).collect();
    let slot_paths: Vec<_> = slots.iter().map(|slot| &slot.trait_path).collect();
    let user_idents: Vec<_> = user_fields.iter().map(|(ident, _)| ident).collect();
    let user_types: Vec<_> = user_fields.iter().map(|(_, ty)| ty).collect();

    let erased = quote!(dyn #ts::__private::Any + ::core::marker::Send + ::core::marker::Sync);

    let accessors = slots.iter().map(|slot| {
        let Slot {
            ident,
            trait_path,
            accessor_path,
            ..
        } = slot;
        quote! {
            impl #impl_generics #accessor_path for #name #ty_generics #where_clause {
                fn #ident(&self) -> &#trait_path {
                    &self.#ident
                }
            }
        }
    });

    let checks = slots.iter().map(|slot| {
        let Slot {
            field, trait_path, ..
        } = slot;
        let message = format!(
            "slot `{field}` does not match the field name of `{}`",
            trait_path.to_token_stream()
        );
        quote! {
            ::core::assert!(
                #ts::__private::const_str_eq(<#trait_path as #ts::MetaTrait>::FIELD, #field),
                #message
            );
        }
    });

    let default_impl = user_fields.is_empty().then(|| {
        quote! {
            impl #impl_generics ::core::default::Default for #name #ty_generics #where_clause {
                fn default() -> Self {
                    Self::compose()
                }
            }
        }
    });

    quote! {
        #item

        impl #impl_generics #ts::Composite for #name #ty_generics #where_clause {
            fn lookup_field(&self, name: &str) -> ::core::option::Option<&(#erased)> {
                match name {
                    #( #slot_names => ::core::option::Option::Some(&self.#slot_idents as &(#erased)), )*
                    _ => ::core::option::Option::None,
                }
            }

            fn composes(&self) -> &[#ts::TraitIdentity] {
                const COMPOSES: &[#ts::TraitIdentity] = &[
                    #( <#slot_paths as #ts::MetaTrait>::TRAIT, )*
                ];
                COMPOSES
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Builds the value, default-constructing every trait slot.
            #[must_use]
            #vis fn compose(#( #user_idents: #user_types ),*) -> Self {
                Self {
                    #( #user_idents, )*
                    #( #slot_idents: <#slot_paths as #ts::MetaTrait>::construct(), )*
                }
            }
        }

        #default_impl

        #( #accessors )*

        const _: () = {
            #( #checks )*
        };
    }
}
