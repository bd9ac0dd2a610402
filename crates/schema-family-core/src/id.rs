// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier declaration metadata.
//!
//! [`IdSpec`] records the identifier type and its storage configuration
//! exactly as they were given to the generator.

/// UUID version used by the default factory.
///
/// | Version | Method | Properties |
/// |---------|--------|------------|
/// | `V4` | `Uuid::new_v4()` | Random, default |
/// | `V7` | `Uuid::now_v7()` | Time-ordered |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UuidVersion {
    /// Random UUID.
    #[default]
    V4,

    /// Time-ordered UUID.
    V7
}

/// How the identifier value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdGeneration {
    /// Assigned by storage on insert (auto-increment).
    Storage,

    /// Produced by a UUID default factory when the record is built.
    Uuid(UuidVersion),

    /// Supplied by the caller.
    Manual
}

impl IdGeneration {
    /// Check if the value exists before the record reaches storage.
    pub const fn is_generated_in_process(&self) -> bool {
        matches!(self, Self::Uuid(_))
    }

    /// Check if the storage layer assigns the value.
    pub const fn is_storage_assigned(&self) -> bool {
        matches!(self, Self::Storage)
    }
}

/// Identifier field declaration of a table type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IdSpec {
    /// Field name (usually `"id"`).
    pub field: &'static str,

    /// Identifier type as written in Rust (token text).
    pub ty: &'static str,

    /// Whether the field is the primary key.
    pub primary_key: bool,

    /// Value generation strategy.
    pub generation: IdGeneration
}
