//! Canned RFC 4648 alphabets.
//!
//! Every preset is built through [`AlphabetBuilder`] on each call; there is no
//! shared global instance.

use crate::alphabet::{Alphabet, AlphabetBuilder};

const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const BASE32_HEX: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUV";
const HEX: &str = "0123456789abcdef";
const BINARY: &str = "01";

/// Named alphabets with a fixed symbol order and padding character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// RFC 4648 §4, `+/` with `=` padding
    Base64,
    /// RFC 4648 §5, `-_` with `=` padding
    Base64Url,
    /// RFC 4648 §6, `A-Z2-7` with `=` padding
    Base32,
    /// RFC 4648 §7, `0-9A-V` with `=` padding
    Base32Hex,
    /// RFC 4648 §8 in lowercase, unpadded
    Hex,
    /// One bit per symbol, unpadded
    Binary,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Base64,
        Preset::Base64Url,
        Preset::Base32,
        Preset::Base32Hex,
        Preset::Hex,
        Preset::Binary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Base64 => "base64",
            Preset::Base64Url => "base64url",
            Preset::Base32 => "base32",
            Preset::Base32Hex => "base32hex",
            Preset::Hex => "hex",
            Preset::Binary => "binary",
        }
    }

    pub fn symbols(&self) -> &'static str {
        match self {
            Preset::Base64 => BASE64,
            Preset::Base64Url => BASE64_URL,
            Preset::Base32 => BASE32,
            Preset::Base32Hex => BASE32_HEX,
            Preset::Hex => HEX,
            Preset::Binary => BINARY,
        }
    }

    /// Canonical padding character for this preset.
    pub fn padding(&self) -> Option<char> {
        match self {
            Preset::Base64 | Preset::Base64Url | Preset::Base32 | Preset::Base32Hex => Some('='),
            Preset::Hex | Preset::Binary => None,
        }
    }

    /// A builder preloaded with this preset, for callers that want to adjust
    /// padding, case folding or ignored characters.
    pub fn builder(&self) -> AlphabetBuilder {
        Alphabet::builder(self.symbols()).padding(self.padding())
    }

    pub fn alphabet(&self) -> Alphabet {
        match self.builder().build() {
            Ok(alphabet) => alphabet,
            Err(err) => unreachable!("preset {} is invalid: {err}", self.as_str()),
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("unknown preset: {s}"))
    }
}

/// Standard base64 (`+/`, `=` padding).
pub fn standard_base64() -> Alphabet {
    Preset::Base64.alphabet()
}

/// URL and filename safe base64 (`-_`, `=` padding).
pub fn web_safe_base64() -> Alphabet {
    Preset::Base64Url.alphabet()
}

/// RFC 4648 base32 (`A-Z2-7`, `=` padding).
pub fn base32() -> Alphabet {
    Preset::Base32.alphabet()
}

/// Base32 with extended hex alphabet (`0-9A-V`, `=` padding).
pub fn base32_hex() -> Alphabet {
    Preset::Base32Hex.alphabet()
}

/// Lowercase hex, unpadded. Decoding is case-sensitive; use
/// `Preset::Hex.builder().case_insensitive(true)` to accept `A-F` too.
pub fn hex() -> Alphabet {
    Preset::Hex.alphabet()
}

pub fn binary() -> Alphabet {
    Preset::Binary.alphabet()
}
