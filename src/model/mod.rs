// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types.
//!
//! Patterns are built fresh per request from a validated [`NumberRange`] and dropped once the
//! page image has been encoded.

pub mod pattern;
pub mod range;

pub use pattern::{FactorPair, Pattern, PatternKind, Point};
pub use range::{NumberRange, NumberRangeError};
