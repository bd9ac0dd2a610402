// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! Base fields carry `validator` attributes, which are repeated on every
//! generated copy of the field:
//!
//! ```rust,ignore
//! #[validate(length(max = 255))]
//! pub name: String,
//! ```
//!
//! `length(max = N)` with an integer literal is also read into the field
//! metadata. Other validators pass through untouched. Doc comments and
//! `#[serde(...)]` attributes are carried over the same way.

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use syn::{
    Attribute, Expr, ExprLit, Field, GenericArgument, Ident, Lit, PathArguments, Token, Type,
    meta::ParseNestedMeta
};

/// Length limit of the stencil's `name` field.
pub const STENCIL_NAME_MAX_LENGTH: usize = 255;

/// One common field, copied into every variant of the family.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Maximum length in characters from `#[validate(length(max = N))]`.
    pub max_length: Option<usize>,

    /// Attributes repeated on every copy (`doc`, `serde`, `validate`).
    pub attrs: Vec<Attribute>
}

impl FieldDef {
    /// Parse a named struct field.
    ///
    /// # Errors
    ///
    /// - the field has no identifier
    /// - `length(max = 0)`
    /// - a maximum length on a field that does not hold text
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("SchemaFamily fields must be named").with_span(field)
        })?;

        let mut max_length = None;
        let mut attrs = Vec::new();
        let mut errors = darling::Error::accumulator();

        for attr in &field.attrs {
            if attr.path().is_ident("validate") {
                match parse_length_max(attr) {
                    Ok(Some(max)) => max_length = Some(max),
                    Ok(None) => {}
                    Err(err) => errors.push(err.into())
                }
                attrs.push(attr.clone());
            } else if attr.path().is_ident("doc") || attr.path().is_ident("serde") {
                attrs.push(attr.clone());
            }
        }

        if let Some(max) = max_length
            && !is_text(&field.ty)
        {
            errors.push(
                darling::Error::custom(format!(
                    "`length(max = {})` needs a string field, found `{}`",
                    max,
                    field.ty.to_token_stream().to_string().replace(' ', "")
                ))
                .with_span(&field.ty)
            );
        }

        errors.finish_with(Self {
            ident,
            ty: field.ty.clone(),
            max_length,
            attrs
        })
    }

    /// The single field of the canonical stencil: `name: String`, at most
    /// 255 characters.
    pub fn stencil_name() -> Self {
        let max = proc_macro2::Literal::usize_unsuffixed(STENCIL_NAME_MAX_LENGTH);
        Self {
            ident:      Ident::new("name", Span::call_site()),
            ty:         syn::parse_quote!(String),
            max_length: Some(STENCIL_NAME_MAX_LENGTH),
            attrs:      vec![
                syn::parse_quote!(#[doc = "Display name."]),
                syn::parse_quote!(#[validate(length(max = #max))]),
            ]
        }
    }

    /// Field name as an identifier.
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Field type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }
}

/// Read `max` out of `#[validate(length(..., max = N, ...))]`.
///
/// Returns `None` when the attribute has no `length` rule or the bound is
/// not an integer literal (e.g. a constant path).
fn parse_length_max(attr: &Attribute) -> syn::Result<Option<usize>> {
    let mut max = None;

    attr.parse_nested_meta(|meta| {
        if !meta.path.is_ident("length") {
            return skip(&meta);
        }
        meta.parse_nested_meta(|bound| {
            if !bound.path.is_ident("max") {
                return skip(&bound);
            }
            let expr: Expr = bound.value()?.parse()?;
            if let Expr::Lit(ExprLit {
                lit: Lit::Int(lit), ..
            }) = &expr
            {
                let value: usize = lit.base10_parse()?;
                if value == 0 {
                    return Err(syn::Error::new_spanned(
                        lit,
                        "length(max) must be greater than zero"
                    ));
                }
                max = Some(value);
            }
            Ok(())
        })
    })?;

    Ok(max)
}

/// Consume `= expr` or `(...)` after a validator name we do not interpret.
fn skip(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}

/// Whether a type holds text: `String`, `str`, `Cow<str>`, possibly behind
/// references, `Box` or `Option`.
fn is_text(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => is_text(&reference.elem),
        Type::Group(group) => is_text(&group.elem),
        Type::Path(path) if path.qself.is_none() => {
            let Some(segment) = path.path.segments.last() else {
                return false;
            };
            match segment.ident.to_string().as_str() {
                "String" | "str" | "Cow" => true,
                "Option" | "Box" => first_type_argument(&segment.arguments).is_some_and(is_text),
                _ => false
            }
        }
        _ => false
    }
}

fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None
    })
}
