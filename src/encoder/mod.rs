//! Bit-stream encoding (alphanumeric mode).
//!
//! Converts input text into the mode-tagged, length-prefixed bit sequence a
//! downstream codeword/error-correction stage would consume. The stream is
//! deliberately not a complete symbol payload: terminator, padding and
//! error-correction codewords are out of scope here.

/// Alphanumeric mode encoder
pub mod alphanumeric;
/// Fixed-width-field bit sequence
pub mod bitstream;
/// Character-to-value lookup tables
pub mod charset;
/// Encoding error taxonomy
pub mod error;

pub use alphanumeric::AlphanumericEncoder;
pub use bitstream::BitStream;
pub use charset::{ALPHANUMERIC_CHARSET, AlphanumericTable, CharacterTable};
pub use error::EncodeError;
