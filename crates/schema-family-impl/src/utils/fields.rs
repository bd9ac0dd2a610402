// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field token helpers for struct bodies and `From` implementations.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::family::parse::FieldDef;

/// Generate `#[doc] pub name: Type` declarations.
pub fn declarations(fields: &[FieldDef]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f| {
            let attrs = &f.attrs;
            let name = f.name();
            let ty = f.ty();
            quote! { #(#attrs)* pub #name: #ty }
        })
        .collect()
}

/// Generate `name: source.name.clone()` assignments.
pub fn assigns_clone(fields: &[FieldDef], source: &str) -> Vec<TokenStream> {
    let src = Ident::new(source, Span::call_site());
    fields
        .iter()
        .map(|f| {
            let name = f.name();
            quote! { #name: ::core::clone::Clone::clone(&#src.#name) }
        })
        .collect()
}

/// Generate a `FieldSpec` literal for one field.
pub fn spec(name: &Ident, type_text: &str, max_length: Option<usize>) -> TokenStream {
    let name = name.to_string();
    let max_length = match max_length {
        Some(max) => quote! { ::core::option::Option::Some(#max) },
        None => quote! { ::core::option::Option::None }
    };
    quote! {
        ::schema_family::FieldSpec {
            name: #name,
            ty: #type_text,
            max_length: #max_length
        }
    }
}

/// Type of a field as compact token text, e.g. `Option<String>`.
pub fn type_text(field: &FieldDef) -> String {
    let ty = field.ty();
    quote!(#ty).to_string().replace(' ', "")
}
