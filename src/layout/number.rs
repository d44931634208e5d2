// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::f64::consts::TAU;

use crate::model::{Pattern, PatternKind, Point};

use super::factors::{best_factor_pair, find_factors};

/// Radius of the circle that carries prime dots and composite cluster centers.
pub const OUTER_RADIUS: f64 = 1.0;
/// Radius of each composite cluster around its center.
pub const CLUSTER_RADIUS: f64 = 0.3;

/// `count` points evenly spaced on a circle, starting at angle 0 and turning counter-clockwise.
pub fn circle_points(count: u64, radius: f64, center: Point) -> Vec<Point> {
    let step = if count == 0 { 0.0 } else { TAU / count as f64 };
    (0..count)
        .map(|i| {
            let (sin, cos) = (i as f64 * step).sin_cos();
            Point::new(center.x + radius * cos, center.y + radius * sin)
        })
        .collect()
}

/// The fixed arrangement used for 3.
fn triad() -> Vec<Point> {
    vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.5, 3f64.sqrt() / 2.0)]
}

/// Deterministic dot pattern for `n`.
///
/// Rules, first match wins:
/// - `1` and `2`: a single dot at the origin
/// - `3`: a fixed triangle
/// - primes: `n` dots on the unit circle
/// - composites: `b` clusters of `a` dots, where `(a, b)` is [`best_factor_pair`]
///
/// `0` has no pattern of its own and is drawn like `1`.
pub fn layout_number(n: u64) -> Pattern {
    match n {
        0..=2 => Pattern::new(n, PatternKind::Origin, vec![Point::ORIGIN]),
        3 => Pattern::new(n, PatternKind::Triad, triad()),
        _ => {
            if find_factors(n).len() == 2 {
                let points = circle_points(n, OUTER_RADIUS, Point::ORIGIN);
                return Pattern::new(n, PatternKind::Prime, points);
            }

            let pair = best_factor_pair(n);
            let mut points = Vec::with_capacity(n as usize);
            for center in circle_points(pair.b(), OUTER_RADIUS, Point::ORIGIN) {
                points.extend(circle_points(pair.a(), CLUSTER_RADIUS, center));
            }
            Pattern::new(n, PatternKind::Composite { pair }, points)
        }
    }
}
