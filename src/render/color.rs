// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Rgb;

/// Supplies one fill color per drawn dot.
///
/// Colors carry no meaning; the renderer asks for a fresh one for every point.
pub trait ColorSource {
    fn next_color(&mut self) -> Rgb;
}

impl<T: ColorSource + ?Sized> ColorSource for &mut T {
    fn next_color(&mut self) -> Rgb {
        (**self).next_color()
    }
}

/// Uniformly random colors, each channel drawn independently.
#[derive(Debug, Clone)]
pub struct RandomColors<R = StdRng> {
    rng: R,
}

impl RandomColors<StdRng> {
    /// Seeded from OS entropy; every page looks different.
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> Rgb {
        self.rng.gen::<[u8; 3]>()
    }
}

/// The same color for every dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidColor(pub Rgb);

impl ColorSource for SolidColor {
    fn next_color(&mut self) -> Rgb {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorSource, RandomColors, SolidColor};

    #[test]
    fn seeded_colors_are_reproducible() {
        let mut a = RandomColors::seeded(42);
        let mut b = RandomColors::seeded(42);
        let first = (0..16).map(|_| a.next_color()).collect::<Vec<_>>();
        let second = (0..16).map(|_| b.next_color()).collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn random_colors_vary() {
        let mut colors = RandomColors::seeded(7);
        let drawn = (0..32).map(|_| colors.next_color()).collect::<Vec<_>>();
        assert!(drawn.windows(2).any(|w| w[0] != w[1]));
    }

    fn draw_two(mut colors: impl ColorSource) -> [[u8; 3]; 2] {
        [colors.next_color(), colors.next_color()]
    }

    #[test]
    fn solid_color_repeats_through_a_mut_ref() {
        let mut solid = SolidColor([1, 2, 3]);
        assert_eq!(draw_two(&mut solid), [[1, 2, 3], [1, 2, 3]]);
        assert_eq!(draw_two(solid), [[1, 2, 3], [1, 2, 3]]);
    }
}
