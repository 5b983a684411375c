//! Alphanumeric mode encoder (mode 0010).
//!
//! Character pairs pack into 11 bits, a trailing single character into 6.

use log::debug;

use super::bitstream::BitStream;
use super::charset::CharacterTable;
use super::error::EncodeError;

/// Mode indicator value for alphanumeric mode
const MODE_ALPHANUMERIC: u32 = 0b0010;
/// Mode indicator width in bits
const MODE_BITS: u8 = 4;
/// Character-count indicator width for this layout
const COUNT_BITS: u8 = 9;
/// Width of a two-character group field
const PAIR_BITS: u8 = 11;
/// Width of a trailing single-character field
const SINGLE_BITS: u8 = 6;
/// Alphabet radix used to pack pairs
const RADIX: u32 = 45;

/// Encodes text into the alphanumeric bit-stream
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Encode `text` against `table` into mode + count + packed groups.
    ///
    /// The input is uppercased first; the alphabet is uppercase-only. A
    /// character missing from the table aborts the whole encode with
    /// [`EncodeError::UnsupportedCharacter`].
    pub fn encode<T: CharacterTable>(text: &str, table: &T) -> Result<BitStream, EncodeError> {
        let normalized = text.to_uppercase();

        let mut values = Vec::with_capacity(normalized.len());
        for (position, character) in normalized.chars().enumerate() {
            match table.value_of(character) {
                Some(value) => values.push(value),
                None => return Err(EncodeError::UnsupportedCharacter { character, position }),
            }
        }

        let mut stream = BitStream::new();
        stream.append_field(MODE_ALPHANUMERIC, MODE_BITS)?;
        // saturate absurd lengths; the width check rejects anything over 9 bits
        let count = u32::try_from(values.len()).unwrap_or(u32::MAX);
        stream.append_field(count, COUNT_BITS)?;

        for group in values.chunks(2) {
            match group {
                [v1, v2] => {
                    stream.append_field(u32::from(*v1) * RADIX + u32::from(*v2), PAIR_BITS)?
                }
                [v1] => stream.append_field(u32::from(*v1), SINGLE_BITS)?,
                _ => unreachable!(),
            }
        }

        debug!("encoded {} characters into {} bits", values.len(), stream.len());
        Ok(stream)
    }
}
