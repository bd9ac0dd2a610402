// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! UUID version for the identifier default factory.

use darling::FromMeta;

/// UUID version used when the identifier is produced by a factory.
///
/// | Version | Method | Properties |
/// |---------|--------|------------|
/// | `V4` | `Uuid::new_v4()` | Random, default |
/// | `V7` | `Uuid::now_v7()` | Time-ordered, sortable |
///
/// # Examples
///
/// ```rust,ignore
/// #[family(id = "uuid")]                                  // v4
/// #[family(id(generated = "uuid", uuid = "v7"))]          // v7
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UuidVersion {
    /// Random UUID via `Uuid::new_v4()`.
    #[default]
    V4,

    /// Time-ordered UUID via `Uuid::now_v7()`.
    V7
}

impl UuidVersion {
    /// Name of the `Uuid` constructor for this version.
    pub fn constructor(self) -> &'static str {
        match self {
            Self::V4 => "new_v4",
            Self::V7 => "now_v7"
        }
    }
}

impl FromMeta for UuidVersion {
    /// Accepts `"v4"`, `"4"`, `"v7"`, `"7"` (case-insensitive).
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "v4" | "4" => Ok(UuidVersion::V4),
            "v7" | "7" => Ok(UuidVersion::V7),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}
