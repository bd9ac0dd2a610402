// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Family prefix extraction and validation.
//!
//! A prefix names the whole family: `Widget` yields `WidgetBase`,
//! `WidgetCreate`, `WidgetRead`, `WidgetUpdate` and `Widget`. It must start
//! with an uppercase ASCII letter and contain only ASCII letters and digits.

use proc_macro2::Span;
use syn::Ident;

const BASE_SUFFIX: &str = "Base";

/// Check a prefix against `^[A-Z][A-Za-z0-9]*$`.
fn is_valid(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false
    }
}

/// Validate a prefix written directly as the stencil's struct name.
pub fn check(ident: &Ident) -> darling::Result<()> {
    let prefix = ident.to_string();
    if is_valid(&prefix) {
        Ok(())
    } else {
        Err(invalid(&prefix).with_span(ident))
    }
}

/// Derive the prefix from a `<Prefix>Base` struct name.
///
/// # Errors
///
/// - the name does not end with `Base`
/// - the name is exactly `Base` (empty prefix)
/// - the remaining prefix is not a valid type name
pub fn from_base_ident(ident: &Ident) -> darling::Result<Ident> {
    let name = ident.to_string();
    let Some(prefix) = name.strip_suffix(BASE_SUFFIX) else {
        return Err(darling::Error::custom(format!(
            "SchemaFamily must be derived on a struct named `<Prefix>Base`, found `{}`",
            name
        ))
        .with_span(ident));
    };

    if prefix.is_empty() {
        return Err(darling::Error::custom(
            "family prefix is empty: name the struct `<Prefix>Base`, e.g. `WidgetBase`"
        )
        .with_span(ident));
    }

    if !is_valid(prefix) {
        return Err(invalid(prefix).with_span(ident));
    }

    Ok(Ident::new(prefix, Span::call_site()))
}

fn invalid(prefix: &str) -> darling::Error {
    darling::Error::custom(format!(
        "family prefix `{}` must start with an uppercase ASCII letter and contain only ASCII \
         letters and digits",
        prefix
    ))
}
