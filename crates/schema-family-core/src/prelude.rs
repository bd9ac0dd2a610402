// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use schema_family_core::prelude::*;
//! ```

pub use crate::{
    Family, FieldSpec, IdGeneration, IdSpec, Identified, Shape, ShapeKind, TableShape,
    UuidVersion
};
