use std::collections::BTreeMap;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Sentinel for characters with no meaning in the alphabet.
const INVALID: u8 = 0xFF;
/// Sentinel for characters skipped during decoding.
const IGNORED: u8 = 0xFE;

/// Result of looking up one input character during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lookup {
    Value(u8),
    Ignored,
    Invalid,
}

/// An immutable encoding alphabet: symbol table, padding policy and the
/// reverse lookup used by the decoder.
///
/// The symbol count is always a power of two between 2 and 64, so every
/// symbol carries a whole number of bits (`bits_per_char`). Alphabets are
/// plain values; share them by reference across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    bits_per_char: usize,
    padding: Option<char>,
    case_insensitive: bool,
    ascii_lookup: [u8; 128],
    extended_lookup: BTreeMap<char, u8>,
}

impl Alphabet {
    /// Creates an alphabet from its symbols, optional padding character and
    /// decoding case policy.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The symbol count is not 2, 4, 8, 16, 32 or 64
    /// - Two symbols collide (after case folding when `case_insensitive`)
    /// - The padding character is one of the symbols
    pub fn new(
        symbols: &str,
        padding: Option<char>,
        case_insensitive: bool,
    ) -> Result<Self, ConfigError> {
        Self::builder(symbols)
            .padding(padding)
            .case_insensitive(case_insensitive)
            .build()
    }

    /// Starts building an alphabet with no padding and case-sensitive decoding.
    pub fn builder(symbols: &str) -> AlphabetBuilder {
        AlphabetBuilder::new(symbols)
    }

    /// Returns the symbols in value order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the number of symbols (the encoding base).
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Number of input bits carried by one output symbol.
    pub fn bits_per_char(&self) -> usize {
        self.bits_per_char
    }

    /// Returns the padding character, if any.
    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Smallest number of symbols that encodes a whole number of bytes.
    ///
    /// Padded output is always a multiple of this: 4 for base64, 8 for
    /// base32, 2 for hex.
    pub fn block_size(&self) -> usize {
        num_integer::lcm(self.bits_per_char, 8) / self.bits_per_char
    }

    /// Whether `count` unpadded symbols can be produced by encoding some
    /// whole number of bytes.
    pub fn is_valid_symbol_count(&self, count: usize) -> bool {
        (count * self.bits_per_char) % 8 < self.bits_per_char
    }

    /// Encodes a value (masked to `bits_per_char` bits) as a symbol.
    pub(crate) fn symbol(&self, value: u32) -> char {
        // The symbol count is 2^bits_per_char, so the masked value is always in range
        self.symbols[(value as usize) & (self.symbols.len() - 1)]
    }

    /// Decodes a character back to its value.
    ///
    /// Returns `None` if the character is not a symbol or a synonym.
    pub fn decode_char(&self, c: char) -> Option<u8> {
        match self.lookup(c) {
            Lookup::Value(value) => Some(value),
            Lookup::Ignored | Lookup::Invalid => None,
        }
    }

    pub(crate) fn lookup(&self, c: char) -> Lookup {
        let entry = if c.is_ascii() {
            self.ascii_lookup[c as usize]
        } else {
            self.extended_lookup.get(&c).copied().unwrap_or(INVALID)
        };

        match entry {
            INVALID => Lookup::Invalid,
            IGNORED => Lookup::Ignored,
            value => Lookup::Value(value),
        }
    }
}

impl FromStr for Alphabet {
    type Err = ConfigError;

    /// Parses an unpadded, case-sensitive alphabet from its symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::builder(s).build()
    }
}

/// Collects optional alphabet parameters before validation.
///
/// ```
/// use alphabase::Alphabet;
///
/// let crockford = Alphabet::builder("0123456789ABCDEFGHJKMNPQRSTVWXYZ")
///     .case_insensitive(true)
///     .synonym('0', 'O')
///     .synonym('1', 'I')
///     .synonym('1', 'L')
///     .ignore("-")
///     .build()
///     .unwrap();
///
/// assert_eq!(alphabase::decode("o1-i0", &crockford).unwrap(), vec![0x00, 0x42]);
/// ```
#[derive(Debug, Clone)]
pub struct AlphabetBuilder {
    symbols: Vec<char>,
    padding: Option<char>,
    case_insensitive: bool,
    synonyms: Vec<(char, char)>,
    ignore: Vec<char>,
}

impl AlphabetBuilder {
    pub fn new(symbols: &str) -> Self {
        AlphabetBuilder {
            symbols: symbols.chars().collect(),
            padding: None,
            case_insensitive: false,
            synonyms: Vec::new(),
            ignore: Vec::new(),
        }
    }

    /// Sets (or clears) the padding character.
    pub fn padding(mut self, padding: Option<char>) -> Self {
        self.padding = padding;
        self
    }

    /// Accept either case of each symbol when decoding.
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Decode `alias` as if it were `symbol`. Encoding is unaffected.
    pub fn synonym(mut self, symbol: char, alias: char) -> Self {
        self.synonyms.push((symbol, alias));
        self
    }

    /// Skip every character of `chars` wherever it appears in decode input.
    pub fn ignore(mut self, chars: &str) -> Self {
        self.ignore.extend(chars.chars());
        self
    }

    /// Validates the parameters and builds the reverse lookup table.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`] for the conditions checked.
    pub fn build(self) -> Result<Alphabet, ConfigError> {
        let base = self.symbols.len();
        if !matches!(base, 2 | 4 | 8 | 16 | 32 | 64) {
            return Err(ConfigError::InvalidLength(base));
        }

        let mut table = LookupTable::new();

        for (value, &c) in self.symbols.iter().enumerate() {
            // base <= 64, so every value fits in the low six bits
            let value = value as u8;
            for variant in case_variants(c, self.case_insensitive) {
                if table.get(variant) != INVALID {
                    return Err(ConfigError::DuplicateSymbol(c));
                }
                table.set(variant, value);
            }
        }

        if let Some(pad) = self.padding {
            let collides = case_variants(pad, self.case_insensitive)
                .into_iter()
                .any(|variant| table.get(variant) != INVALID);
            if collides {
                return Err(ConfigError::PaddingCollision(pad));
            }
        }

        for &(target, alias) in &self.synonyms {
            let value = match table.get(target) {
                INVALID => return Err(ConfigError::UnknownSynonymTarget(target)),
                value => value,
            };
            for variant in case_variants(alias, self.case_insensitive) {
                if Some(variant) == self.padding {
                    return Err(ConfigError::PaddingCollision(variant));
                }
                match table.get(variant) {
                    INVALID => table.set(variant, value),
                    existing if existing == value => {}
                    _ => return Err(ConfigError::DuplicateSymbol(alias)),
                }
            }
        }

        for &c in &self.ignore {
            if table.get(c) != INVALID || Some(c) == self.padding {
                return Err(ConfigError::IgnoredSymbol(c));
            }
            table.set(c, IGNORED);
        }

        let bits_per_char = base.trailing_zeros() as usize;
        log::debug!(
            "built base-{base} alphabet ({bits_per_char} bits/char, padding {:?}, case-insensitive {})",
            self.padding,
            self.case_insensitive
        );

        Ok(Alphabet {
            symbols: self.symbols,
            bits_per_char,
            padding: self.padding,
            case_insensitive: self.case_insensitive,
            ascii_lookup: table.ascii,
            extended_lookup: table.extended,
        })
    }
}

/// Reverse lookup under construction: a flat array for ASCII and an ordered
/// map for everything else.
struct LookupTable {
    ascii: [u8; 128],
    extended: BTreeMap<char, u8>,
}

impl LookupTable {
    fn new() -> Self {
        LookupTable {
            ascii: [INVALID; 128],
            extended: BTreeMap::new(),
        }
    }

    fn get(&self, c: char) -> u8 {
        if c.is_ascii() {
            self.ascii[c as usize]
        } else {
            self.extended.get(&c).copied().unwrap_or(INVALID)
        }
    }

    fn set(&mut self, c: char, value: u8) {
        if c.is_ascii() {
            self.ascii[c as usize] = value;
        } else {
            self.extended.insert(c, value);
        }
    }
}

/// The characters a symbol answers to. Case mappings that expand to more
/// than one character are not folded.
fn case_variants(c: char, case_insensitive: bool) -> Vec<char> {
    let mut variants = vec![c];
    if case_insensitive {
        for folded in [single_char(c.to_lowercase()), single_char(c.to_uppercase())]
            .into_iter()
            .flatten()
        {
            if !variants.contains(&folded) {
                variants.push(folded);
            }
        }
    }
    variants
}

fn single_char(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    mapping.next().is_none().then_some(first)
}
