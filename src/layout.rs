//! Bit-width layouts for packed version numbers.
//!
//! # Safety Invariants
//!
//! A `BitLayout` maintains critical invariants at all times:
//! - **Never empty**: at least one component width
//! - **Valid widths**: every width is in `[1, 64]`
//! - **Bounded total**: the widths sum to at most 64 bits
//!
//! These invariants are enforced at construction (including deserialization),
//! so the shift and mask arithmetic in the codec never needs to re-check them.

use serde::{Deserialize, Serialize};

use crate::MAX_TOTAL_BITS;

/// Errors that can occur when constructing a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A layout must define at least one component.
    #[error("a layout must define at least one component width")]
    Empty,

    /// A component width was zero or wider than the packed integer.
    #[error("component {index} has invalid bit width {width} (must be 1..=64)")]
    InvalidWidth {
        /// 1-based position of the offending width.
        index: usize,
        /// The rejected width.
        width: u8,
    },

    /// The component widths sum to more than 64 bits.
    #[error("total bit width {total} exceeds the 64-bit packed form")]
    TotalWidthExceeded {
        /// Sum of all component widths.
        total: u32,
    },
}

/// An ordered list of per-component bit widths, defining both the validation
/// bounds and the bit-field positions of a packed version number.
///
/// Component 0 occupies the most-significant bits of the packed form and the
/// last component the least-significant bits, which is what makes unsigned
/// comparison of packed values equivalent to lexicographic comparison of
/// component tuples.
///
/// Immutable once constructed; cheap to clone and safe to share across
/// threads. Serializes as the plain width list, and deserialization re-runs
/// construction validation, so a layout read from configuration is checked
/// exactly like one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct BitLayout {
    widths: Vec<u8>,
}

impl BitLayout {
    /// Creates a layout from per-component bit widths.
    ///
    /// ## Errors
    /// - `Empty` if no widths are given
    /// - `InvalidWidth` if any width is 0 or greater than 64
    /// - `TotalWidthExceeded` if the widths sum to more than 64 bits
    pub fn new(widths: impl Into<Vec<u8>>) -> Result<Self, LayoutError> {
        let widths = widths.into();

        if widths.is_empty() {
            return Err(LayoutError::Empty);
        }

        for (index, &width) in widths.iter().enumerate() {
            if width == 0 || u32::from(width) > MAX_TOTAL_BITS {
                return Err(LayoutError::InvalidWidth { index: index + 1, width });
            }
        }

        let total: u32 = widths.iter().map(|&w| u32::from(w)).sum();
        if total > MAX_TOTAL_BITS {
            return Err(LayoutError::TotalWidthExceeded { total });
        }

        Ok(Self { widths })
    }

    /// The per-component bit widths, in component order.
    pub fn widths(&self) -> &[u8] {
        &self.widths
    }

    /// The number of components the layout defines.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// The total bit width of the packed form, `sum(widths)`.
    pub fn total_bits(&self) -> u32 {
        self.widths.iter().map(|&w| u32::from(w)).sum()
    }

    /// The largest value component `index` (0-based) can hold, `2^w - 1`.
    ///
    /// ## Panics
    /// Panics if `index` is out of bounds, like any slice access.
    pub fn max_component(&self, index: usize) -> u64 {
        // SAFETY: widths are in [1, 64] due to struct invariants, so the
        // shift below is in [0, 63] and cannot overflow.
        u64::MAX >> (MAX_TOTAL_BITS - u32::from(self.widths[index]))
    }

    /// Mask covering the low `total_bits()` bits of a `u64`.
    pub fn total_mask(&self) -> u64 {
        // SAFETY: total_bits() is in [1, 64] due to struct invariants.
        u64::MAX >> (MAX_TOTAL_BITS - self.total_bits())
    }

    /// Bit position of component `index` (0-based) within the packed form:
    /// the sum of the widths of all later components.
    pub(crate) fn shift(&self, index: usize) -> u32 {
        self.widths[index + 1..]
            .iter()
            .map(|&w| u32::from(w))
            .sum()
    }
}

/// The default layout: three 8-bit components, a `major.minor.patch` scheme
/// with each component capped at 255.
impl Default for BitLayout {
    fn default() -> Self {
        Self { widths: crate::DEFAULT_NUMBER_BITS.to_vec() }
    }
}

/// String representation for layouts: `BitLayout(8,8,8)`.
impl std::fmt::Display for BitLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitLayout(")?;
        for (i, width) in self.widths.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", width)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<u8>> for BitLayout {
    type Error = LayoutError;

    fn try_from(widths: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(widths)
    }
}

impl From<BitLayout> for Vec<u8> {
    fn from(layout: BitLayout) -> Self {
        layout.widths
    }
}
