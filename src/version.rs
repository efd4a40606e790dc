//! The version value type: a packed integer paired with its layout.
//!
//! A [`Version`] is created once, at the boundary, from either a string or a
//! previously stored packed integer. After that every comparison is plain
//! unsigned comparison of the packed form; there is no implicit string
//! coercion anywhere. Instances are immutable.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::codec;
use crate::error::Error;
use crate::layout::BitLayout;

/// An immutable version value.
///
/// Ordering, equality and hashing all operate on the packed integer only,
/// which equals lexicographic component ordering for versions sharing a
/// layout. Comparing versions built with different layouts compares their
/// packed integers like any other pair, but carries no semantic meaning.
///
/// Serializes as the bare packed integer, the storage representation.
/// Reconstructing from storage goes through [`Version::from_packed`] with
/// the layout the value was packed under.
#[derive(Debug, Clone)]
pub struct Version {
    packed: u64,
    layout: BitLayout,
}

impl Version {
    /// Parses and validates a version string against a layout.
    ///
    /// Runs the full validation contract: [`codec::parse`] for the numeric
    /// check, then [`BitLayout::encode`] for the length and range checks.
    ///
    /// ## Errors
    /// Any of the [`Error`] validation kinds, with the 1-based component
    /// index of the offending part.
    pub fn parse(text: &str, layout: &BitLayout) -> Result<Self, Error> {
        let components = codec::parse(text)?;
        let packed = layout.encode(&components)?;

        Ok(Self { packed, layout: layout.clone() })
    }

    /// Reconstructs a version from a previously stored packed integer.
    ///
    /// Infallible: the input is masked to the layout's total bits, matching
    /// [`BitLayout::decode`]. Packed values produced by this crate are always
    /// in range already.
    pub fn from_packed(packed: u64, layout: &BitLayout) -> Self {
        Self {
            packed: packed & layout.total_mask(),
            layout: layout.clone(),
        }
    }

    /// The packed integer, the persistence representation.
    pub fn packed(&self) -> u64 {
        self.packed
    }

    /// The layout this version was packed under.
    pub fn layout(&self) -> &BitLayout {
        &self.layout
    }

    /// Decodes the packed form into the component tuple.
    pub fn components(&self) -> Vec<u64> {
        self.layout.decode(self.packed)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.packed == other.packed
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        codec::compare(self.packed, other.packed)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.packed.hash(state);
    }
}

/// Renders the canonical dot-separated form, trailing zeros included:
/// a version parsed from `"1.0"` under a three-component layout displays
/// as `"1.0.0"`.
impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.layout.render(&self.components()))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_case::test_case;

    /// Test parsing and canonical display under the default layout
    #[test_case("1.0.1", 65537, "1.0.1"; "full form")]
    #[test_case("1.0", 65536, "1.0.0"; "short form padded on display")]
    #[test_case("0.1", 256, "0.1.0"; "minor only")]
    #[test_case("0", 0, "0.0.0"; "zero")]
    #[test_case("255.255.255", 0x00FF_FFFF, "255.255.255"; "maxed")]
    fn test_parse_and_display(text: &str, packed: u64, display: &str) {
        let layout = BitLayout::default();
        let version = Version::parse(text, &layout).unwrap();

        assert_eq!(version.packed(), packed);
        assert_eq!(version.to_string(), display);
        assert_eq!(version.layout(), &layout);
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        let layout = BitLayout::default();

        assert_matches!(
            Version::parse("10.x.1", &layout),
            Err(Error::NonNumericComponent { index: 2, .. })
        );
        assert_matches!(
            Version::parse("1.999.1", &layout),
            Err(Error::ComponentOverflow { index: 2, value: 999, max: 255 })
        );
        assert_matches!(
            Version::parse("10.11.12.13", &layout),
            Err(Error::TooManyComponents { actual: 4, allowed: 3 })
        );
    }

    /// Ordering is packed-integer ordering, which is semantic version
    /// ordering under one layout.
    #[test]
    fn test_ordering() {
        let layout = BitLayout::default();
        let parse = |s| Version::parse(s, &layout).unwrap();

        assert!(parse("0.9.9") < parse("1.0"));
        assert!(parse("1.0") < parse("1.0.1"));
        assert!(parse("1.0.1") < parse("1.1"));
        assert!(parse("2.0") > parse("1.255.255"));
        assert_eq!(parse("1.0"), parse("1.0.0"));

        let mut versions = vec![parse("2.0"), parse("0.1"), parse("1.10"), parse("1.2")];
        versions.sort();
        let rendered: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, ["0.1.0", "1.2.0", "1.10.0", "2.0.0"]);
    }

    /// Storage round trip: packed out, from_packed back in.
    #[test]
    fn test_from_packed_round_trip() {
        let layout = BitLayout::new(vec![8, 16, 8]).unwrap();
        let original = Version::parse("1.999.1", &layout).unwrap();

        let restored = Version::from_packed(original.packed(), &layout);
        assert_eq!(restored, original);
        assert_eq!(restored.to_string(), "1.999.1");
        assert_eq!(restored.components(), [1, 999, 1]);
    }

    /// from_packed masks input wider than the layout, matching decode.
    #[test]
    fn test_from_packed_masks() {
        let layout = BitLayout::default();
        let version = Version::from_packed(0xFF_0001_0203, &layout);
        assert_eq!(version.packed(), 0x0001_0203);
        assert_eq!(version.to_string(), "1.2.3");
    }

    /// Versions serialize as the bare packed integer.
    #[test]
    fn test_serialize_as_packed() {
        let layout = BitLayout::default();
        let version = Version::parse("1.0.1", &layout).unwrap();

        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "65537");
    }
}
