//! # Order-Preserving Version Packing
//!
//! This module implements the conversion between dotted version strings,
//! component tuples and the packed integer form. The packing concatenates
//! fixed-width bit fields with component 0 in the most-significant position:
//!
//! ```text
//! packed = Σ c_i << S_i      where S_i = Σ_{j>i} w_j
//! ```
//!
//! For example, under the default `[8, 8, 8]` layout, `"1.2.3"` packs as
//! `1 << 16 | 2 << 8 | 3` = 66051.
//!
//! Because earlier components occupy higher-order bits, unsigned comparison
//! of two packed values is exactly lexicographic comparison of the component
//! tuples; see [`compare`]. Encoding then decoding under the same layout is
//! the identity on canonical form (trailing zeros included).
//!
//! Validation is split in two: [`parse`] rejects non-numeric components, and
//! [`BitLayout::encode`] rejects tuples that are too long or out of bounds.
//! String-origin input must pass through both; together they are the full
//! input-validation contract. [`BitLayout::decode`] and [`BitLayout::render`]
//! never fail.

use std::cmp::Ordering;

use crate::error::Error;
use crate::layout::BitLayout;

/// Splits a version string into its numeric components.
///
/// The text is split on `.`; each part must be non-empty and composed
/// entirely of ASCII decimal digits. No sign, no whitespace, no leading `+`.
/// This is the validation boundary invoked before [`BitLayout::encode`];
/// length and range checks happen there, against a concrete layout.
///
/// ## Errors
/// * `NonNumericComponent` - a part is empty or contains a non-digit,
///   identified by its 1-based index
/// * `ComponentOverflow` - a part's value exceeds `u64::MAX` and therefore
///   the bound of every expressible layout
pub fn parse(text: &str) -> Result<Vec<u64>, Error> {
    text.split('.')
        .enumerate()
        .map(|(i, part)| {
            let index = i + 1;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::NonNumericComponent { index, part: part.to_string() });
            }
            // All-digit parts only fail conversion by exceeding u64, which
            // exceeds the bound of any layout the packed form can hold.
            part.parse::<u64>().map_err(|_| Error::ComponentOverflow {
                index,
                value: u64::MAX,
                max: u64::MAX,
            })
        })
        .collect()
}

/// Compares two packed version values.
///
/// Plain unsigned comparison: the encoding places the most-significant
/// component in the highest-order bits, so this equals lexicographic
/// comparison of the decoded component tuples without decoding anything.
/// Only meaningful for values packed under the same layout.
pub fn compare(a: u64, b: u64) -> Ordering {
    a.cmp(&b)
}

impl BitLayout {
    /// Packs a component tuple into a single integer.
    ///
    /// Missing trailing components are treated as 0, so `[1]` and `[1, 0, 0]`
    /// pack identically under a three-component layout. Pure; no side
    /// effects.
    ///
    /// ## Errors
    /// * `TooManyComponents` - more components than the layout defines
    /// * `ComponentOverflow` - a component exceeds `2^w - 1` for its
    ///   position, identified by its 1-based index
    pub fn encode(&self, components: &[u64]) -> Result<u64, Error> {
        if components.len() > self.len() {
            return Err(Error::TooManyComponents {
                actual: components.len(),
                allowed: self.len(),
            });
        }

        let mut packed = 0u64;
        for (index, &value) in components.iter().enumerate() {
            let max = self.max_component(index);
            if value > max {
                return Err(Error::ComponentOverflow { index: index + 1, value, max });
            }

            // SAFETY: the shift is safe because every component width is at
            // least 1, so the shift for component i is at most 64 - w_i <= 63.
            // The value fits its field (checked above), so fields cannot
            // overlap.
            packed |= value << self.shift(index);
        }

        Ok(packed)
    }

    /// Unpacks an integer into its component tuple, the inverse of
    /// [`encode`](Self::encode).
    ///
    /// Never fails: input wider than [`total_bits`](Self::total_bits) is
    /// masked to the low bits first, matching the packing formula. This is
    /// defined behavior rather than an error; packed values produced by
    /// `encode` are always in range.
    pub fn decode(&self, packed: u64) -> Vec<u64> {
        let packed = packed & self.total_mask();

        (0..self.len())
            .map(|index| (packed >> self.shift(index)) & self.max_component(index))
            .collect()
    }

    /// Renders a component tuple as the canonical dot-separated string.
    ///
    /// Always emits all of the layout's components: missing trailing
    /// components render as `0`, so `[1]` renders as `"1.0.0"` under a
    /// three-component layout. Components beyond the layout length are
    /// ignored (render input normally comes from [`decode`](Self::decode),
    /// which cannot produce extras). Never fails.
    pub fn render(&self, components: &[u64]) -> String {
        let mut out = String::new();
        for index in 0..self.len() {
            if index > 0 {
                out.push('.');
            }
            let value = components.get(index).copied().unwrap_or(0);
            out.push_str(&value.to_string());
        }
        out
    }
}
