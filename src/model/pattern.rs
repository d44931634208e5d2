// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

/// A position in the abstract layout plane (unitless, y grows upwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Two factors `a * b = n` with `a <= b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FactorPair {
    a: u64,
    b: u64,
}

impl FactorPair {
    /// Builds a pair from two factors in any order; the smaller one becomes `a`.
    pub fn new(x: u64, y: u64) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    /// Points per cluster.
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Number of clusters.
    pub fn b(&self) -> u64 {
        self.b
    }

    pub fn product(&self) -> u64 {
        self.a * self.b
    }

    pub fn diff(&self) -> u64 {
        self.b - self.a
    }
}

/// Which placement rule produced a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternKind {
    /// A single dot at the origin (used for 1 and 2).
    Origin,
    /// The fixed three-dot triangle used for 3.
    Triad,
    /// `n` dots on the unit circle.
    Prime,
    /// `pair.b()` clusters of `pair.a()` dots each.
    Composite { pair: FactorPair },
}

/// The dots that represent one integer, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    n: u64,
    #[serde(flatten)]
    kind: PatternKind,
    points: Vec<Point>,
}

impl Pattern {
    pub(crate) fn new(n: u64, kind: PatternKind, points: Vec<Point>) -> Self {
        Self { n, kind, points }
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Groups of consecutive points, one per cluster.
    ///
    /// Non-composite patterns are returned as a single group.
    pub fn clusters(&self) -> impl Iterator<Item = &[Point]> {
        let size = match self.kind {
            PatternKind::Composite { pair } => pair.a() as usize,
            _ => self.points.len().max(1),
        };
        self.points.chunks(size)
    }

    /// Axis-aligned bounds `(min, max)` of the points, or `None` when empty.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}
