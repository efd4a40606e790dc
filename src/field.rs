//! Narrow adapter surface for form and storage layers.
//!
//! Consumers of the codec typically sit between a user-facing string (a form
//! input, a CLI argument) and a stored packed integer (a database column).
//! [`VersionField`] is that seam, reduced to exactly three operations:
//! validate a string into the storage form, turn the storage form back into
//! a display string, and enumerate the configured bit widths. Everything
//! else (ORM hooks, widget wiring) belongs to the consumer.

use crate::codec;
use crate::error::Error;
use crate::layout::BitLayout;

/// The adapter interface between user-facing version strings and the packed
/// storage form.
pub trait VersionField {
    /// Parses and validates a user-facing string into the packed integer.
    ///
    /// ## Errors
    /// Any of the [`Error`] validation kinds; the structured fields (1-based
    /// component index, offending value, allowed bound) are intended to be
    /// mapped directly onto the adapter's own validation-error type.
    fn clean(&self, input: &str) -> Result<u64, Error>;

    /// Converts a stored packed integer back to the canonical display string.
    fn display(&self, stored: u64) -> String;

    /// The configured per-component bit widths.
    fn number_bits(&self) -> &[u8];
}

/// The standard [`VersionField`] implementation, backed by a [`BitLayout`].
#[derive(Debug, Clone, Default)]
pub struct PackedVersionField {
    layout: BitLayout,
}

impl PackedVersionField {
    /// Creates a field with the given layout. `PackedVersionField::default()`
    /// uses the default `[8, 8, 8]` layout.
    pub fn new(layout: BitLayout) -> Self {
        Self { layout }
    }

    /// The field's layout.
    pub fn layout(&self) -> &BitLayout {
        &self.layout
    }
}

impl VersionField for PackedVersionField {
    fn clean(&self, input: &str) -> Result<u64, Error> {
        // Single validation path for both the numeric-format check and the
        // per-component bound check; there is no separate storage-level
        // overflow error.
        let result = codec::parse(input).and_then(|components| self.layout.encode(&components));

        if let Err(error) = &result {
            tracing::debug!(%input, %error, "rejected version input");
        }

        result
    }

    fn display(&self, stored: u64) -> String {
        self.layout.render(&self.layout.decode(stored))
    }

    fn number_bits(&self) -> &[u8] {
        self.layout.widths()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Test the string-to-storage direction, including the error taxonomy
    #[test_case("1.0.1" => Ok(65537); "valid input")]
    #[test_case("1.0" => Ok(65536); "short form")]
    #[test_case("1.999.1" => Err(Error::ComponentOverflow { index: 2, value: 999, max: 255 }); "component too big")]
    #[test_case("10.x.1" => Err(Error::NonNumericComponent { index: 2, part: "x".to_string() }); "non numeric component")]
    #[test_case("10.11.12.13" => Err(Error::TooManyComponents { actual: 4, allowed: 3 }); "too many components")]
    fn test_clean(input: &str) -> Result<u64, Error> {
        PackedVersionField::default().clean(input)
    }

    /// Test the storage-to-display direction
    #[test_case(65537, "1.0.1"; "mixed")]
    #[test_case(0, "0.0.0"; "zero")]
    #[test_case(0x00FF_FFFF, "255.255.255"; "maxed")]
    fn test_display(stored: u64, expected: &str) {
        assert_eq!(PackedVersionField::default().display(stored), expected);
    }

    #[test]
    fn test_number_bits() {
        let field = PackedVersionField::default();
        assert_eq!(field.number_bits(), &[8, 8, 8]);

        let field = PackedVersionField::new(BitLayout::new(vec![8, 16, 8]).unwrap());
        assert_eq!(field.number_bits(), &[8, 16, 8]);
    }

    /// A wider layout accepts what the default layout rejects.
    #[test]
    fn test_layout_governs_bounds() {
        let wide = PackedVersionField::new(BitLayout::new(vec![8, 16, 8]).unwrap());

        let stored = wide.clean("1.999.1").unwrap();
        assert_eq!(wide.display(stored), "1.999.1");
    }

    /// clean then display is the identity on canonical strings.
    #[test]
    fn test_clean_display_round_trip() {
        let field = PackedVersionField::default();

        for text in ["0.0.0", "1.0.1", "3.0.1", "255.255.255"] {
            let stored = field.clean(text).unwrap();
            assert_eq!(field.display(stored), text);
        }
    }
}
