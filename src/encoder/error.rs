use thiserror::Error;

/// Fatal encoding failures.
///
/// Encoding is all-or-nothing: no partial bit-stream survives an error, and
/// retrying with the same input cannot succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The input contains a character the alphanumeric alphabet cannot
    /// represent
    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter {
        /// The offending character, after uppercase normalization
        character: char,
        /// Character index in the normalized input
        position: usize,
    },

    /// A computed value does not fit its fixed-width field. Cannot occur
    /// for a correctly bounded 45-symbol alphabet, so hitting it means a
    /// logic defect rather than bad input.
    #[error("value {value} does not fit in a {width}-bit field")]
    FieldOverflow {
        /// The value that was about to be appended
        value: u32,
        /// The field width in bits
        width: u8,
    },
}
