// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Family generator.
//!
//! Both entry points parse into a [`FamilyDef`] and share one generator.
//!
//! # Architecture
//!
//! ```text
//! family.rs (orchestrator)
//! │
//! ├── parse/        → FamilyDef, FieldDef, IdDef, prefix rules
//! ├── variant.rs    → Base / Create / Read / Update / Table
//! │
//! ├── shapes.rs     → struct definitions
//! ├── metadata.rs   → Shape, Identified, TableShape, Family impls
//! └── mappers.rs    → From impls, with_id, apply
//! ```

mod mappers;
mod metadata;
pub mod parse;
mod shapes;
pub mod variant;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::FamilyDef;

/// Entry point for `#[derive(SchemaFamily)]`.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match FamilyDef::from_derive_input(&input) {
        Ok(family) => generate(&family).into(),
        Err(err) => err.write_errors().into()
    }
}

/// Entry point for `schema_family!`.
pub fn stencil(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match FamilyDef::from_stencil(&input) {
        Ok(family) => generate(&family).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(family: &FamilyDef) -> proc_macro2::TokenStream {
    let shapes = shapes::generate(family);
    let metadata = metadata::generate(family);
    let mappers = mappers::generate(family);

    quote! {
        #shapes
        #metadata
        #mappers
    }
}
