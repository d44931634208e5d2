// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Factordots: integers drawn as dot patterns.
//!
//! Primes become evenly spaced dots on a circle; composites become clusters of dots arranged by
//! their most square factor pair. A small axum app renders ranges of numbers as a PNG grid.

pub mod config;
pub mod input;
pub mod layout;
pub mod model;
pub mod render;
pub mod web;
