use thiserror::Error;

/// Errors raised while building an [`Alphabet`](crate::Alphabet).
///
/// Construction is the only place alphabets are validated; a successfully
/// built alphabet never produces one of these later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Symbol count is not one of 2, 4, 8, 16, 32 or 64
    #[error("alphabet has {0} symbols, expected 2, 4, 8, 16, 32 or 64")]
    InvalidLength(usize),
    /// Two symbols (or a symbol and a synonym) decode identically
    #[error("duplicate symbol '{0}' in alphabet")]
    DuplicateSymbol(char),
    /// The padding character is also used as a symbol
    #[error("padding character '{0}' collides with an alphabet symbol")]
    PaddingCollision(char),
    /// A synonym points at a character that is not in the alphabet
    #[error("synonym target '{0}' is not an alphabet symbol")]
    UnknownSynonymTarget(char),
    /// A character marked as ignorable already has a meaning
    #[error("ignored character '{0}' is already a symbol, synonym or padding")]
    IgnoredSymbol(char),
}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    #[error("invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },
    /// The unpadded symbol count cannot be produced by any byte length
    #[error("invalid length: {0} symbols cannot end on a byte boundary")]
    InvalidLength(usize),
    /// The padding is malformed or incorrect
    #[error("invalid padding")]
    InvalidPadding,
    /// Decoded bytes were requested as text but are not UTF-8
    #[error("decoded data is not valid UTF-8")]
    InvalidUtf8,
}

/// Errors from loading and resolving named alphabets.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse alphabet configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to read alphabet configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("alphabet '{name}' is invalid: {source}")]
    Alphabet {
        name: String,
        #[source]
        source: ConfigError,
    },
    #[error("alphabet '{name}' has padding {value:?}, expected a single character")]
    MalformedPadding { name: String, value: String },
    #[error("synonym key {key:?} in alphabet '{name}' must be a single character")]
    MalformedSynonym { name: String, key: String },
    #[error("{}", not_found_message(.name, .suggestion.as_deref()))]
    NotFound {
        name: String,
        suggestion: Option<String>,
    },
}

impl RegistryError {
    pub fn not_found(name: impl Into<String>, suggestion: Option<String>) -> Self {
        RegistryError::NotFound {
            name: name.into(),
            suggestion,
        }
    }
}

fn not_found_message(name: &str, suggestion: Option<&str>) -> String {
    match suggestion {
        Some(suggestion) => {
            format!("alphabet '{name}' not found (did you mean '{suggestion}'?)")
        }
        None => format!("alphabet '{name}' not found, run `alphabase --list` to see all alphabets"),
    }
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();

    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest registered alphabet name, if any is a plausible typo.
pub fn find_closest_alphabet<'a, I>(name: &str, available: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    // 1-2 edits for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .into_iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
