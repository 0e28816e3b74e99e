// Copyright (c) 2025 Trie Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Levenshtein edit distance.
//!
//! Both functions operate on `char`s rather than bytes, so multi-byte
//! characters count as a single edit.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions required to turn `s` into `t`. The full dynamic-programming
/// table is built, with `d(i, 0) = i`, `d(0, j) = j` and each inner cell taken
/// from its diagonal, upper and left neighbours.
///
/// # Examples
///
/// ```
/// use trie_dictionary_lib::utils::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s: &str, t: &str) -> usize {
    let s_chars: Vec<char> = s.chars().collect();
    let t_chars: Vec<char> = t.chars().collect();
    let m = s_chars.len();
    let n = t_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 0..=m {
        table[i][0] = i;
    }
    for j in 0..=n {
        table[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if s_chars[i - 1] == t_chars[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + min(
                    min(
                        table[i - 1][j], // deletion
                        table[i][j - 1], // insertion
                    ),
                    table[i - 1][j - 1], // substitution
                )
            };
        }
    }

    table[m][n]
}

/// Calculate the Levenshtein distance, giving up once it exceeds `max_distance`.
///
/// Returns `Some(distance)` when `distance <= max_distance` and `None`
/// otherwise. Only two rows of the table are kept, and the computation stops
/// early when the length difference alone, or the smallest value in a row,
/// is already above the bound.
pub fn levenshtein_distance_within(s: &str, t: &str, max_distance: usize) -> Option<usize> {
    let s_chars: Vec<char> = s.chars().collect();
    let t_chars: Vec<char> = t.chars().collect();
    let m = s_chars.len();
    let n = t_chars.len();

    if m.abs_diff(n) > max_distance {
        return None;
    }
    if m == 0 || n == 0 {
        let distance = m.max(n);
        return (distance <= max_distance).then_some(distance);
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0usize; n + 1];

    for i in 1..=m {
        curr_row[0] = i;
        let mut row_min = i;

        for j in 1..=n {
            curr_row[j] = if s_chars[i - 1] == t_chars[j - 1] {
                prev_row[j - 1]
            } else {
                1 + min(min(prev_row[j], curr_row[j - 1]), prev_row[j - 1])
            };
            row_min = min(row_min, curr_row[j]);
        }

        // Row minima never decrease, so nothing below can come back under the bound.
        if row_min > max_distance {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[n];
    (distance <= max_distance).then_some(distance)
}
