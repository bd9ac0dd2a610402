// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Conversions between family members.
//!
//! | Conversion | Purpose |
//! |------------|---------|
//! | `From<Create> for Base`, `From<Update> for Base` | inputs reduce to the common fields |
//! | `From<Base> for Create` | prefill a creation form |
//! | `From<Table>`/`From<&Table> for Read` | serialize a stored record |
//! | `From<Table> for Base`, `From<Read> for Base` | drop the identifier |
//! | `Table::with_id(id, create)` | build a record once storage assigned the id |
//! | `Table::apply(&mut self, update)` | overwrite common fields |
//! | `From<Create> for Table` | only when the id comes from a UUID factory |

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{parse::FamilyDef, variant::Variant};
use crate::utils::fields;

/// Generate all conversions.
pub fn generate(family: &FamilyDef) -> TokenStream {
    let base = generate_base_conversions(family);
    let read = generate_read_conversions(family);
    let table = generate_table_methods(family);
    let factory = generate_factory_conversion(family);

    quote! {
        #base
        #read
        #table
        #factory
    }
}

/// `let Source { a, b } = value; Self { a, b }` between two members that
/// hold exactly the common fields.
fn move_fields(family: &FamilyDef, from: &Ident, to: &Ident) -> TokenStream {
    let names = family.field_names();

    quote! {
        impl ::core::convert::From<#from> for #to {
            fn from(value: #from) -> Self {
                let #from { #(#names),* } = value;
                Self { #(#names),* }
            }
        }
    }
}

/// `From<Source> for Target` dropping the identifier.
fn drop_id(family: &FamilyDef, from: &Ident, to: &Ident) -> TokenStream {
    let names = family.field_names();

    quote! {
        impl ::core::convert::From<#from> for #to {
            fn from(value: #from) -> Self {
                let #from { #(#names,)* .. } = value;
                Self { #(#names),* }
            }
        }
    }
}

fn generate_base_conversions(family: &FamilyDef) -> TokenStream {
    let base = family.ident(Variant::Base);
    let create = family.ident(Variant::Create);
    let update = family.ident(Variant::Update);

    let create_to_base = move_fields(family, &create, &base);
    let update_to_base = move_fields(family, &update, &base);
    let base_to_create = move_fields(family, &base, &create);

    quote! {
        #create_to_base
        #update_to_base
        #base_to_create
    }
}

fn generate_read_conversions(family: &FamilyDef) -> TokenStream {
    let base = family.ident(Variant::Base);
    let read = family.ident(Variant::Read);
    let table = family.ident(Variant::Table);
    let id = &family.id.field;
    let names = family.field_names();
    let clones = fields::assigns_clone(family.fields(), "entity");

    let table_to_base = drop_id(family, &table, &base);
    let read_to_base = drop_id(family, &read, &base);

    quote! {
        impl ::core::convert::From<#table> for #read {
            fn from(entity: #table) -> Self {
                let #table { #(#names,)* #id } = entity;
                Self { #(#names,)* #id }
            }
        }

        impl ::core::convert::From<&#table> for #read {
            fn from(entity: &#table) -> Self {
                Self {
                    #(#clones,)*
                    #id: ::core::clone::Clone::clone(&entity.#id)
                }
            }
        }

        #table_to_base
        #read_to_base
    }
}

fn generate_table_methods(family: &FamilyDef) -> TokenStream {
    let vis = &family.vis;
    let table = family.ident(Variant::Table);
    let create = family.ident(Variant::Create);
    let update = family.ident(Variant::Update);
    let id = &family.id.field;
    let id_ty = &family.id.ty;
    let names = family.field_names();
    // Mixed-site so an identifier field named `dto` does not clash.
    let dto = Ident::new("dto", Span::mixed_site());

    quote! {
        impl #table {
            /// Build a record from creation input and its identifier.
            #vis fn with_id(#id: #id_ty, #dto: #create) -> Self {
                let #create { #(#names),* } = #dto;
                Self { #(#names,)* #id }
            }

            /// Overwrite the common fields with an update, keeping the
            /// identifier.
            #vis fn apply(&mut self, #dto: #update) {
                let #update { #(#names),* } = #dto;
                #(self.#names = #names;)*
            }
        }
    }
}

fn generate_factory_conversion(family: &FamilyDef) -> TokenStream {
    let Some(factory) = family.id.factory_expr() else {
        return TokenStream::new();
    };

    let table = family.ident(Variant::Table);
    let create = family.ident(Variant::Create);

    quote! {
        impl ::core::convert::From<#create> for #table {
            fn from(dto: #create) -> Self {
                Self::with_id(#factory, dto)
            }
        }
    }
}
