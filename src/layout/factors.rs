// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Factordots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Factordots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::FactorPair;

/// Largest `r` with `r * r <= n`.
pub(crate) fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut r = (n as f64).sqrt() as u64;
    // The float estimate can be off by one in either direction for large inputs.
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

/// All divisors of `n` in ascending order, including 1 and `n` itself.
///
/// Returns an empty list for `n == 0`.
pub fn find_factors(n: u64) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }

    let mut low = Vec::new();
    let mut high = Vec::new();
    for d in 1..=isqrt(n) {
        if n % d == 0 {
            low.push(d);
            let co = n / d;
            if co != d {
                high.push(co);
            }
        }
    }

    low.extend(high.into_iter().rev());
    low
}

/// `true` when `n` has exactly two divisors.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..=isqrt(n)).all(|d| n % d != 0)
}

/// The factorization `a * b = n` (`a <= b`) with the smallest `b - a`.
///
/// Divisors are scanned upwards from 2; on a tie the first pair found wins. Primes and 1 yield
/// `(1, n)`.
pub fn best_factor_pair(n: u64) -> FactorPair {
    let mut best = FactorPair::new(1, n);
    for d in 2..=isqrt(n) {
        if n % d != 0 {
            continue;
        }
        let candidate = FactorPair::new(d, n / d);
        if candidate.diff() < best.diff() {
            best = candidate;
        }
    }
    best
}
