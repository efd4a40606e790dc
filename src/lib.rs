#![deny(missing_docs)]

//! # Verpack: Bit-Packed Version Number Codec
//!
//! `verpack` packs a multi-component version identifier (e.g. `"3.0.1"`) into
//! a single `u64` and back, such that unsigned integer ordering of the packed
//! form exactly matches the semantic ordering of the version numbers. The
//! packed integer is the intended storage representation: a single indexed
//! integer column sorts and compares versions without ever decoding them.
//!
//! ## Usage Example
//!
//! ```
//! use verpack::{BitLayout, Version};
//!
//! // Three 8-bit components: major.minor.patch, each capped at 255.
//! let layout = BitLayout::default();
//!
//! let a = Version::parse("1.0", &layout).unwrap();
//! let b = Version::parse("1.0.1", &layout).unwrap();
//!
//! assert_eq!(a.packed(), 65536);
//! assert_eq!(b.packed(), 65537);
//! assert!(a < b);
//! assert_eq!(b.to_string(), "1.0.1");
//! ```
//!
//! ## Ordering Guarantee
//!
//! The layout places component 0 in the most-significant bits and the last
//! component in the least-significant bits, so for any two in-bounds component
//! tuples `a` and `b` packed under the same layout:
//!
//! `packed(a) < packed(b)  ⇔  a <lex b`
//!
//! This equivalence is the point of the encoding. Any alternative bit
//! allocation order breaks it.
//!
//! ## Architecture
//!
//! * **BitLayout**: validated per-component bit widths, shift/mask arithmetic
//! * **Codec**: `parse`, `encode`, `decode`, `render`, `compare`
//! * **Version**: immutable value pairing a packed integer with its layout
//! * **Field**: narrow adapter surface for form/storage layers

pub mod codec;
pub mod error;
pub mod field;
pub mod layout;
pub mod version;

pub use codec::compare;
pub use codec::parse;

pub use error::Error;

pub use layout::BitLayout;
pub use layout::LayoutError;

pub use version::Version;

pub use field::PackedVersionField;
pub use field::VersionField;

/// Default per-component bit widths: three 8-bit components (24 bits total),
/// a `major.minor.patch` scheme with each component capped at 255.
pub const DEFAULT_NUMBER_BITS: [u8; 3] = [8, 8, 8];

/// Maximum total bit width of a layout. The packed form is a `u64`, so the
/// widths of all components must sum to at most this many bits.
pub const MAX_TOTAL_BITS: u32 = u64::BITS;
