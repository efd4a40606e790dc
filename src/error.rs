//! Validation error taxonomy for the version codec.
//!
//! All variants are synchronous caller input-validation failures, never
//! transient faults. Encode/parse is all-or-nothing: the codec surfaces these
//! immediately with enough structured detail (component index, offending
//! value, allowed bound) for an adapter layer to produce a precise
//! user-facing message. Decode and render never fail.

/// Errors raised while validating and packing version input.
///
/// Component indexes are 1-based: `"10.x.1"` fails on index 2. This matches
/// how version components are counted in user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input has more dot-separated components than the layout defines.
    #[error("version has {actual} components; only {allowed} components are allowed")]
    TooManyComponents {
        /// Number of components supplied.
        actual: usize,
        /// Number of components the layout allows.
        allowed: usize,
    },

    /// A component is not composed solely of decimal digits. Signs,
    /// whitespace and empty components are all rejected here.
    #[error("version component {index} ({part:?}) is not numeric; only numeric values are allowed")]
    NonNumericComponent {
        /// 1-based position of the offending component.
        index: usize,
        /// The offending substring, verbatim.
        part: String,
    },

    /// A component's numeric value exceeds what its bit-width field can hold.
    #[error("version component {index} ({value}) is too big; maximum allowed value for this component is {max}")]
    ComponentOverflow {
        /// 1-based position of the offending component.
        index: usize,
        /// The value that was supplied.
        value: u64,
        /// The largest value the component's field can hold, `2^w - 1`.
        max: u64,
    },
}
