use crate::alphabet::{Alphabet, Lookup};
use crate::errors::DecodeError;

/// Encodes `data` by slicing it into `bits_per_char`-bit groups, MSB first.
///
/// A short final group is zero-filled on the low side. If the alphabet has
/// a padding character, the output is padded to a whole block.
pub fn encode_chunked(data: &[u8], alphabet: &Alphabet) -> String {
    let bits_per_char = alphabet.bits_per_char();
    let mask = (1u32 << bits_per_char) - 1;

    // Pre-calculate output size for better memory allocation
    let symbol_count = (data.len() * 8).div_ceil(bits_per_char);
    let block_size = alphabet.block_size();
    let capacity = if alphabet.padding().is_some() {
        symbol_count.div_ceil(block_size) * block_size
    } else {
        symbol_count
    };
    let mut result = String::with_capacity(capacity);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | u32::from(byte);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits_per_char {
            bits_in_buffer -= bits_per_char;
            result.push(alphabet.symbol((bit_buffer >> bits_in_buffer) & mask));
        }
    }

    // Handle remaining bits
    if bits_in_buffer > 0 {
        result.push(alphabet.symbol((bit_buffer << (bits_per_char - bits_in_buffer)) & mask));
    }

    if let Some(pad_char) = alphabet.padding() {
        // Base64: LCM(6,8)=24, group=4
        // Base32: LCM(5,8)=40, group=8
        // Base16: LCM(4,8)=8, group=2
        let padded_chars = symbol_count.div_ceil(block_size) * block_size;
        result.extend(std::iter::repeat_n(pad_char, padded_chars - symbol_count));
    }

    result
}

/// Decodes text produced by [`encode_chunked`] (or any conforming encoder).
///
/// Ignored characters are skipped wherever they appear. Padding must form a
/// single trailing run whose length completes the final block; unpadded input
/// is accepted as long as its symbol count is one an encoder could produce.
pub fn decode_chunked(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    let bits_per_char = alphabet.bits_per_char();
    let padding = alphabet.padding();

    let mut values = Vec::with_capacity(encoded.len());
    let mut padding_run = 0usize;

    for (position, c) in encoded.chars().enumerate() {
        if Some(c) == padding {
            padding_run += 1;
            continue;
        }

        match alphabet.lookup(c) {
            Lookup::Value(value) => {
                // Data after padding
                if padding_run > 0 {
                    return Err(DecodeError::InvalidPadding);
                }
                values.push(value);
            }
            Lookup::Ignored => {}
            Lookup::Invalid => {
                return Err(DecodeError::InvalidCharacter { char: c, position });
            }
        }
    }

    let symbol_count = values.len();
    if padding_run > 0 {
        let block_size = alphabet.block_size();
        let residue = symbol_count % block_size;
        if residue == 0
            || padding_run != block_size - residue
            || !alphabet.is_valid_symbol_count(residue)
        {
            return Err(DecodeError::InvalidPadding);
        }
    } else if !alphabet.is_valid_symbol_count(symbol_count) {
        return Err(DecodeError::InvalidLength(symbol_count));
    }

    let mut result = Vec::with_capacity(symbol_count * bits_per_char / 8);
    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for value in values {
        bit_buffer = (bit_buffer << bits_per_char) | u32::from(value);
        bits_in_buffer += bits_per_char;

        // bits_per_char < 8, so each symbol completes at most one byte
        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((bit_buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    // Leftover bits are tolerated in unpadded input, but padded input claims
    // a canonical final block
    let leftover = bit_buffer & ((1u32 << bits_in_buffer) - 1);
    if padding_run > 0 && leftover != 0 {
        return Err(DecodeError::InvalidPadding);
    }

    Ok(result)
}
