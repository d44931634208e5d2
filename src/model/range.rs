// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// An inclusive, non-empty range of positive integers.
///
/// Construction enforces `1 <= start <= end`, so everything downstream of a
/// `NumberRange` can assume a valid request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberRange {
    start: u64,
    end: u64,
}

impl NumberRange {
    pub fn new(start: u64, end: u64) -> Result<Self, NumberRangeError> {
        if start == 0 {
            return Err(NumberRangeError::Zero);
        }
        if start > end {
            return Err(NumberRangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(n: u64) -> Result<Self, NumberRangeError> {
        Self::new(n, n)
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of integers in the range (always at least 1).
    pub fn count(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<u64> {
        self.start..=self.end
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberRangeError {
    Zero,
    Reversed { start: u64, end: u64 },
}

impl fmt::Display for NumberRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("range must start at 1 or above"),
            Self::Reversed { start, end } => {
                write!(f, "range start {start} is greater than its end {end}")
            }
        }
    }
}

impl std::error::Error for NumberRangeError {}
