// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Embedded 5x7 bitmap font for cell labels.
//!
//! Each glyph is 7 rows; the lower 5 bits of a row are pixels, MSB on the left.

pub(crate) const GLYPH_WIDTH: u32 = 5;
pub(crate) const GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between glyph origins (glyph plus one column of spacing).
pub(crate) const ADVANCE: u32 = 6;

#[rustfmt::skip]
const DIGITS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // '0'
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // '1'
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // '2'
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // '3'
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // '4'
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // '5'
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // '6'
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // '7'
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // '8'
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // '9'
];

const DASH: [u8; 7] = [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00];

pub(crate) fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    match ch {
        '0'..='9' => DIGITS.get(ch as usize - '0' as usize),
        '-' => Some(&DASH),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::glyph;

    #[test]
    fn every_digit_has_a_distinct_glyph() {
        let glyphs = ('0'..='9').map(|ch| glyph(ch).expect("digit glyph")).collect::<Vec<_>>();
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn glyph_rows_fit_five_columns() {
        for ch in ('0'..='9').chain(['-']) {
            let rows = glyph(ch).expect("glyph");
            assert!(rows.iter().all(|row| row & !0x1F == 0), "{ch}");
        }
    }

    #[test]
    fn letters_have_no_glyph() {
        assert!(glyph('a').is_none());
        assert!(glyph(' ').is_none());
    }
}
