use crate::charset::{Alphabet, compose_alphabet};
use crate::config::GenerationConfig;
use crate::error::{Error, Result};
use crate::length::check_length;
use crate::random::{OsRandom, RandomSource};
use zeroize::Zeroizing;

pub fn generate_password(config: &GenerationConfig) -> Result<Zeroizing<String>> {
    generate_with(config, &mut OsRandom)
}

// Length and alphabet are checked before any byte is requested.
pub fn generate_with<R: RandomSource>(
    config: &GenerationConfig,
    source: &mut R,
) -> Result<Zeroizing<String>> {
    let length = check_length(config.length)?;
    let alphabet = compose_alphabet(config)?;
    generate_from_alphabet(&alphabet, length, source)
}

/// Each byte `b` selects `alphabet[b % alphabet.len()]`, so when the size does
/// not divide 256 the first `256 % len` characters are slightly more likely.
pub fn generate_from_alphabet<R: RandomSource>(
    alphabet: &Alphabet,
    length: usize,
    source: &mut R,
) -> Result<Zeroizing<String>> {
    let length = check_length(length)?;
    let chars = alphabet.as_slice();
    if chars.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let mut buffer = Zeroizing::new(vec![0u8; length]);
    source.fill_bytes(&mut buffer)?;

    let mut password = Zeroizing::new(String::with_capacity(length));
    for &byte in buffer.iter() {
        password.push(chars[byte as usize % chars.len()]);
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};
    use crate::config::Preset;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Replays a fixed byte pattern and counts how many bytes were asked for.
    struct FixedSource {
        bytes: Vec<u8>,
        requested: usize,
    }

    impl FixedSource {
        fn new(bytes: Vec<u8>) -> Self {
            Self {
                bytes,
                requested: 0,
            }
        }
    }

    impl RandomSource for FixedSource {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
            for (i, b) in dest.iter_mut().enumerate() {
                *b = self.bytes[(self.requested + i) % self.bytes.len()];
            }
            self.requested += dest.len();
            Ok(())
        }
    }

    struct FailingSource;

    impl RandomSource for FailingSource {
        fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<()> {
            Err(Error::RandomSource("entropy pool unavailable".to_string()))
        }
    }

    fn config(length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            ..GenerationConfig::DEFAULT
        }
    }

    #[test]
    fn test_password_length() {
        for length in [1, 6, 16, 20, 256] {
            let password = generate_password(&config(length)).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_password_charset() {
        let config = config(256);
        let alphabet = compose_alphabet(&config).unwrap();
        let password = generate_password(&config).unwrap();

        for ch in password.chars() {
            assert!(
                alphabet.contains(ch),
                "Password contains invalid character: {:?}",
                ch
            );
        }
    }

    #[test]
    fn test_byte_to_index_mapping() {
        let digits = GenerationConfig {
            length: 6,
            ..GenerationConfig::PIN
        };
        let mut source = FixedSource::new(vec![0, 9, 10, 255, 128, 37]);
        let password = generate_with(&digits, &mut source).unwrap();

        // 255 % 10 = 5, 128 % 10 = 8, 37 % 10 = 7
        assert_eq!(*password, "090587");
        assert_eq!(source.requested, 6);
    }

    #[test]
    fn test_modulo_bias_is_kept() {
        let alphabet = compose_alphabet(&GenerationConfig::PIN).unwrap();
        let all_bytes: Vec<u8> = (0u8..=255).collect();
        let mut source = FixedSource::new(all_bytes);
        let password = generate_from_alphabet(&alphabet, 256, &mut source).unwrap();

        let count = |d: char| password.chars().filter(|&c| c == d).count();
        // 256 = 25 * 10 + 6, so '0'..='5' get one extra draw.
        for d in '0'..='5' {
            assert_eq!(count(d), 26);
        }
        for d in '6'..='9' {
            assert_eq!(count(d), 25);
        }
    }

    #[test]
    fn test_empty_alphabet() {
        let config = GenerationConfig {
            length: 16,
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            exclude_ambiguous: false,
        };
        let mut source = FixedSource::new(vec![1]);

        assert_eq!(generate_with(&config, &mut source), Err(Error::EmptyAlphabet));
        assert_eq!(source.requested, 0);
    }

    #[test]
    fn test_invalid_length_draws_nothing() {
        let mut source = FixedSource::new(vec![1]);

        assert!(matches!(
            generate_with(&config(0), &mut source),
            Err(Error::InvalidLength(_))
        ));
        assert_eq!(
            generate_with(&config(257), &mut source),
            Err(Error::LengthTooLarge(257))
        );
        assert_eq!(source.requested, 0);
    }

    #[test]
    fn test_random_source_failure() {
        let result = generate_with(&config(16), &mut FailingSource);
        assert_eq!(
            result,
            Err(Error::RandomSource("entropy pool unavailable".to_string()))
        );
    }

    #[test]
    fn test_pin_preset() {
        let password = generate_password(&Preset::Pin.config()).unwrap();
        assert_eq!(password.len(), 6);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_strong_preset() {
        let config = Preset::Strong.config();
        let allowed: HashSet<char> = [LOWERCASE, UPPERCASE, NUMBERS, SYMBOLS]
            .concat()
            .chars()
            .collect();
        assert!(allowed.len() >= 64);
        assert!(allowed.contains(&'l') && allowed.contains(&'0'));

        let password = generate_password(&config).unwrap();
        assert_eq!(password.chars().count(), 20);
        assert!(password.chars().all(|c| allowed.contains(&c)));
    }

    #[test]
    fn test_simple_preset_has_no_ambiguous() {
        let config = GenerationConfig {
            length: 256,
            ..Preset::Simple.config()
        };
        for _ in 0..8 {
            let password = generate_password(&config).unwrap();
            assert!(!password.chars().any(|c| "il1Lo0O".contains(c)));
        }
    }

    #[test]
    fn test_non_deterministic() {
        let config = config(16);
        let mut repeats = 0;

        for _ in 0..1000 {
            let a = generate_password(&config).unwrap();
            let b = generate_password(&config).unwrap();
            if *a == *b {
                repeats += 1;
            }
        }

        assert!(repeats <= 1, "{} identical pairs out of 1000", repeats);
    }

    fn any_config() -> impl Strategy<Value = GenerationConfig> {
        (
            1usize..=256,
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(length, lower, upper, numbers, symbols, ambiguous)| {
                GenerationConfig {
                    length,
                    include_lowercase: lower,
                    include_uppercase: upper,
                    include_numbers: numbers,
                    include_symbols: symbols,
                    exclude_ambiguous: ambiguous,
                }
            })
    }

    proptest! {
        #[test]
        fn test_output_drawn_from_alphabet(config in any_config(), seed in any::<Vec<u8>>()) {
            let mut bytes = seed;
            bytes.push(0);
            let mut source = FixedSource::new(bytes);

            match compose_alphabet(&config) {
                Ok(alphabet) => {
                    let password = generate_with(&config, &mut source).unwrap();
                    prop_assert_eq!(password.chars().count(), config.length);
                    prop_assert!(password.chars().all(|c| alphabet.contains(c)));
                }
                Err(e) => {
                    prop_assert_eq!(e, Error::EmptyAlphabet);
                    prop_assert_eq!(generate_with(&config, &mut source), Err(Error::EmptyAlphabet));
                }
            }
        }
    }
}
