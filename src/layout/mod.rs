// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for number patterns.
//!
//! This module turns an integer into the dot coordinates the renderer draws. It is pure and
//! total: every input yields a pattern, and the same input always yields the same pattern.

pub mod factors;
pub mod number;

pub use factors::{best_factor_pair, find_factors, is_prime};
pub use number::{circle_points, layout_number, CLUSTER_RADIUS, OUTER_RADIUS};
