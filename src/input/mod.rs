// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Validation of the free-text form inputs.
//!
//! Both input modes end in a [`NumberRange`]; nothing reaches the layout or render code
//! without passing through here first.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::NumberRange;

/// Upper bounds that keep a single request's work bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    /// Most numbers a single page may show.
    pub max_count: u64,
    /// Largest number that may be drawn (a prime draws this many dots).
    pub max_number: u64,
    /// Most dots a single page may draw, i.e. the sum of all numbers in the range.
    pub max_points: u64,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self { max_count: 60, max_number: 100_000, max_points: 250_000 }
    }
}

impl RenderLimits {
    /// Rejects ranges that exceed either limit.
    pub fn check(&self, range: NumberRange) -> Result<NumberRange, InputError> {
        if range.count() > self.max_count {
            return Err(InputError::RangeTooLarge { max_count: self.max_count });
        }
        if range.end() > self.max_number {
            return Err(InputError::NumberTooLarge { max_number: self.max_number });
        }
        if point_count(range) > self.max_points {
            return Err(InputError::TooManyPoints { max_points: self.max_points });
        }
        Ok(range)
    }
}

/// Dots drawn for `range`: every number `n` is laid out as `n` points, except 2 (one dot).
///
/// Saturates instead of overflowing.
pub fn point_count(range: NumberRange) -> u64 {
    let (start, end) = (u128::from(range.start()), u128::from(range.end()));
    let mut total = (start + end) * (end - start + 1) / 2;
    if range.iter().contains(&2) {
        total -= 1;
    }
    u64::try_from(total).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidRange,
    InvalidNumber,
    RangeTooLarge { max_count: u64 },
    NumberTooLarge { max_number: u64 },
    TooManyPoints { max_points: u64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange => f.write_str("Please enter a valid range (e.g., 5-10)."),
            Self::InvalidNumber => f.write_str("Please enter a valid number (greater than 0)."),
            Self::RangeTooLarge { max_count } => {
                write!(f, "Please enter a range of at most {max_count} numbers.")
            }
            Self::NumberTooLarge { max_number } => {
                write!(f, "Please enter numbers no greater than {max_number}.")
            }
            Self::TooManyPoints { max_points } => {
                write!(f, "Please enter a smaller range (at most {max_points} dots per page).")
            }
        }
    }
}

impl std::error::Error for InputError {}

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\+?[0-9]+)\s*-\s*(\+?[0-9]+)\s*$")
            .expect("range pattern is a valid regex")
    })
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\+?[0-9]+)\s*$").expect("number pattern is a valid regex")
    })
}

/// Parses `start-end` (surrounding whitespace allowed) into an inclusive range.
///
/// Rejects non-numeric text, zero, reversed bounds and anything beyond `limits`.
pub fn parse_range(text: &str, limits: &RenderLimits) -> Result<NumberRange, InputError> {
    let caps = range_pattern().captures(text).ok_or(InputError::InvalidRange)?;
    let start = caps[1].parse::<u64>().map_err(|_| InputError::InvalidRange)?;
    let end = caps[2].parse::<u64>().map_err(|_| InputError::InvalidRange)?;
    let range = NumberRange::new(start, end).map_err(|_| InputError::InvalidRange)?;
    limits.check(range)
}

/// Parses a single positive integer into a one-element range.
pub fn parse_single(text: &str, limits: &RenderLimits) -> Result<NumberRange, InputError> {
    let caps = number_pattern().captures(text).ok_or(InputError::InvalidNumber)?;
    let n = caps[1].parse::<u64>().map_err(|_| InputError::InvalidNumber)?;
    let range = NumberRange::single(n).map_err(|_| InputError::InvalidNumber)?;
    limits.check(range)
}
