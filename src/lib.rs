//! Table-driven binary-to-text encoding.
//!
//! One bit-packing codec covers base64, base32, hex and any custom alphabet
//! whose size is a power of two from 2 to 64; an [`Alphabet`] value carries
//! everything that differs between them.
//!
//! ```
//! use alphabase::{decode, encode, standard_base64};
//!
//! let alphabet = standard_base64();
//! assert_eq!(encode(b"foo", &alphabet), "Zm9v");
//! assert_eq!(decode("Zm8=", &alphabet).unwrap(), b"fo");
//! ```

mod alphabet;
mod chunked;
mod config;
mod errors;
mod presets;

pub use alphabet::{Alphabet, AlphabetBuilder};
pub use config::{AlphabetConfig, AlphabetsConfig};
pub use errors::{ConfigError, DecodeError, RegistryError};
pub use presets::{Preset, base32, base32_hex, binary, hex, standard_base64, web_safe_base64};

/// Encodes bytes as text. Never fails; empty input encodes to "".
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    chunked::encode_chunked(data, alphabet)
}

/// Decodes text back to bytes, rejecting anything an encoder could not
/// have produced.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    chunked::decode_chunked(encoded, alphabet).inspect_err(|e| {
        log::debug!(
            "rejected {} characters for base-{} alphabet: {e}",
            encoded.chars().count(),
            alphabet.base()
        );
    })
}

/// Encodes the UTF-8 bytes of `text`.
pub fn encode_str(text: &str, alphabet: &Alphabet) -> String {
    encode(text.as_bytes(), alphabet)
}

/// Decodes into a `String`, failing if the bytes are not UTF-8.
pub fn decode_to_string(encoded: &str, alphabet: &Alphabet) -> Result<String, DecodeError> {
    let bytes = decode(encoded, alphabet)?;
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

#[cfg(test)]
mod tests;
