// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The five members of a family.

use proc_macro2::TokenStream;
use quote::quote;

/// One generated type of a family.
///
/// Mirrors `schema_family::ShapeKind` on the expansion side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Base,
    Create,
    Read,
    Update,
    Table
}

impl Variant {
    /// All variants in emission order.
    pub const ALL: [Variant; 5] = [
        Variant::Base,
        Variant::Create,
        Variant::Read,
        Variant::Update,
        Variant::Table
    ];

    /// Suffix appended to the prefix; the table type has none.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Create => "Create",
            Self::Read => "Read",
            Self::Update => "Update",
            Self::Table => ""
        }
    }

    /// Only the read and table types carry the identifier.
    pub fn has_id(self) -> bool {
        matches!(self, Self::Read | Self::Table)
    }

    /// `ShapeKind` path for this variant.
    pub fn kind_tokens(self) -> TokenStream {
        match self {
            Self::Base => quote! { ::schema_family::ShapeKind::Base },
            Self::Create => quote! { ::schema_family::ShapeKind::Create },
            Self::Read => quote! { ::schema_family::ShapeKind::Read },
            Self::Update => quote! { ::schema_family::ShapeKind::Update },
            Self::Table => quote! { ::schema_family::ShapeKind::Table }
        }
    }

    /// Default doc comment of the generated struct.
    pub fn doc(self, prefix: &str) -> String {
        match self {
            Self::Base => format!("Fields shared by every `{}` shape.", prefix),
            Self::Create => format!("Input for creating a `{}`.", prefix),
            Self::Read => format!("`{}` as returned to clients.", prefix),
            Self::Update => format!("Input for modifying a `{}`.", prefix),
            Self::Table => format!("Storage-backed `{}` record.", prefix)
        }
    }
}
