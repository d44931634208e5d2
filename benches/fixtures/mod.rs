// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures.

use factordots::model::NumberRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    SinglePrime,
    SmallMixed,
    FullPage,
    LargeNumbers,
}

impl Case {
    pub const ALL: [Case; 4] =
        [Self::SinglePrime, Self::SmallMixed, Self::FullPage, Self::LargeNumbers];

    pub const fn id(self) -> &'static str {
        match self {
            Self::SinglePrime => "single_prime",
            Self::SmallMixed => "small_mixed",
            Self::FullPage => "full_page",
            Self::LargeNumbers => "large_numbers",
        }
    }

    pub const fn bounds(self) -> (u64, u64) {
        match self {
            Self::SinglePrime => (97, 97),
            Self::SmallMixed => (1, 12),
            Self::FullPage => (1, 60),
            Self::LargeNumbers => (9_990, 10_010),
        }
    }

    pub fn range(self) -> NumberRange {
        let (start, end) = self.bounds();
        NumberRange::new(start, end).expect("fixture range")
    }
}

/// Fixed seed so every run draws identical pages.
pub const COLOR_SEED: u64 = 0x5eed;
