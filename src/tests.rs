use crate::{
    Alphabet, AlphabetsConfig, ConfigError, DecodeError, Preset, decode, decode_to_string, encode,
    encode_str, hex, standard_base64,
};

fn get_alphabet(name: &str) -> Alphabet {
    let config = AlphabetsConfig::load_default().unwrap();
    config.alphabet(name).unwrap()
}

/// Deterministic filler bytes covering every value and odd lengths.
fn sample(len: usize) -> Vec<u8> {
    let mut state = 0x2545_F491u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

#[test]
fn test_roundtrip_every_registered_alphabet() {
    let config = AlphabetsConfig::load_default().unwrap();
    for name in config.names() {
        let alphabet = config.alphabet(name).unwrap();
        for len in 0..40 {
            let data = sample(len);
            let encoded = encode(&data, &alphabet);
            let decoded = decode(&encoded, &alphabet).unwrap();
            assert_eq!(decoded, data, "{name} failed at length {len}");
        }
    }
}

#[test]
fn test_roundtrip_custom_alphabets() {
    for (symbols, padding) in [
        ("ab", Some('.')),
        ("WXYZ", None),
        ("!@#$%^&*", Some('~')),
        ("🐶🐱🐭🐹🐰🦊🐻🐼🐨🐯🦁🐮🐷🐸🐵🐔", None),
    ] {
        let alphabet = Alphabet::new(symbols, padding, false).unwrap();
        let data = sample(257);
        let encoded = encode(&data, &alphabet);
        assert_eq!(decode(&encoded, &alphabet).unwrap(), data);
    }
}

#[test]
fn test_encode_all_byte_values() {
    let data: Vec<u8> = (0..=255).collect();
    for preset in Preset::ALL {
        let alphabet = preset.alphabet();
        let encoded = encode(&data, &alphabet);
        assert_eq!(decode(&encoded, &alphabet).unwrap(), data);
    }
}

#[test]
fn test_padded_output_length() {
    for preset in Preset::ALL {
        let alphabet = preset.alphabet();
        for len in 0..20 {
            let encoded = encode(&sample(len), &alphabet);
            let symbols = encoded.chars().count();
            if alphabet.padding().is_some() {
                assert_eq!(symbols % alphabet.block_size(), 0);
            } else {
                assert_eq!(symbols, (len * 8).div_ceil(alphabet.bits_per_char()));
            }
        }
    }
}

#[test]
fn test_known_vectors() {
    let alphabet = standard_base64();
    assert_eq!(encode(b"", &alphabet), "");
    assert_eq!(encode(b"f", &alphabet), "Zg==");
    assert_eq!(encode(b"fo", &alphabet), "Zm8=");
    assert_eq!(encode(b"foo", &alphabet), "Zm9v");
    assert_eq!(encode(&[0x00, 0xFF], &hex()), "00ff");
}

#[test]
fn test_rejections() {
    assert_eq!(decode("A", &standard_base64()), Err(DecodeError::InvalidLength(1)));
    assert_eq!(decode("Zm9=", &standard_base64()), Err(DecodeError::InvalidPadding));
    assert!(matches!(
        decode("00FF", &hex()),
        Err(DecodeError::InvalidCharacter { .. })
    ));
    assert_eq!(
        Alphabet::new("0123456789", None, false),
        Err(ConfigError::InvalidLength(10))
    );
    assert_eq!(
        Alphabet::new("0123456789abcdea", None, false),
        Err(ConfigError::DuplicateSymbol('a'))
    );
}

#[test]
fn test_registry_hex_is_case_insensitive() {
    let alphabet = get_alphabet("hex");
    assert_eq!(decode("00FF", &alphabet).unwrap(), vec![0x00, 0xFF]);
    assert_eq!(encode(&[0xAB, 0xCD], &alphabet), "abcd");
    assert_eq!(encode(&[0xAB, 0xCD], &get_alphabet("hex_upper")), "ABCD");
}

#[test]
fn test_registry_base64_skips_line_breaks() {
    let alphabet = get_alphabet("base64");
    let wrapped = "aGVsbG8g\nd29ybGQ=\n";
    assert_eq!(decode(wrapped, &alphabet).unwrap(), b"hello world");
}

#[test]
fn test_rebuilt_alphabets_behave_identically() {
    let a = Preset::Base32.alphabet();
    let b = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", Some('='), false).unwrap();
    let data = sample(100);
    assert_eq!(encode(&data, &a), encode(&data, &b));
    assert_eq!(decode("MZXW6===", &a), decode("MZXW6===", &b));
    assert_eq!(decode("MZXW6==", &a), decode("MZXW6==", &b));
}

#[test]
fn test_string_helpers() {
    let alphabet = standard_base64();
    let encoded = encode_str("héllo", &alphabet);
    assert_eq!(decode_to_string(&encoded, &alphabet).unwrap(), "héllo");

    let invalid = encode(&[0xFF, 0xFE], &alphabet);
    assert_eq!(
        decode_to_string(&invalid, &alphabet),
        Err(DecodeError::InvalidUtf8)
    );
}

#[test]
fn test_shared_alphabet_across_threads() {
    let alphabet = standard_base64();
    std::thread::scope(|scope| {
        for len in [0usize, 1, 2, 3, 64, 1000] {
            let alphabet = &alphabet;
            scope.spawn(move || {
                let data = sample(len);
                let encoded = encode(&data, alphabet);
                assert_eq!(decode(&encoded, alphabet).unwrap(), data);
            });
        }
    });
}
