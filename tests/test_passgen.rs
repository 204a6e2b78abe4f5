use rpawogen::passgen::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn all_flag_combinations() -> Vec<(bool, bool, bool, bool)> {
        (1u8..16)
            .map(|bits| (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0))
            .collect()
    }

    fn class_of(c: char) -> CharClass {
        CharClass::ALL
            .into_iter()
            .find(|class| class.contains(c))
            .unwrap_or_else(|| panic!("character {:?} is in no class", c))
    }

    #[test]
    fn test_generate_password_default_options() {
        let generator = PasswordGenerator::default();
        let password = generator.generate().unwrap();
        assert_eq!(password.chars().count(), DEFAULT_LENGTH);
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_generate_password_exact_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for (upper, lower, digits, special) in all_flag_combinations() {
            for length in [4, 5, 12, 16, 64] {
                let generator =
                    PasswordGenerator::with_options(length, upper, lower, digits, special).unwrap();
                let password = generator.generate_with(&mut rng).unwrap();
                assert_eq!(password.chars().count(), length);
            }
        }
    }

    #[test]
    fn test_generate_password_uses_only_enabled_classes() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for (upper, lower, digits, special) in all_flag_combinations() {
            let generator =
                PasswordGenerator::with_options(24, upper, lower, digits, special).unwrap();
            let enabled = generator.enabled_classes();
            let charset = generator.charset().unwrap();
            for _ in 0..20 {
                let password = generator.generate_with(&mut rng).unwrap();
                assert!(password.chars().all(|c| charset.contains(&c)));
                for class in &enabled {
                    assert!(
                        password.chars().any(|c| class.contains(c)),
                        "{} missing from {:?}",
                        class,
                        password
                    );
                }
            }
        }
    }

    #[test]
    fn test_generate_password_without_special() {
        let generator = PasswordGenerator::with_options(12, true, true, true, false).unwrap();
        for _ in 0..100 {
            let password = generator.generate().unwrap();
            assert_eq!(password.len(), 12);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_password_minimum_length_all_classes() {
        let generator = PasswordGenerator::with_options(4, true, true, true, true).unwrap();
        for _ in 0..100 {
            let password = generator.generate().unwrap();
            assert_eq!(password.len(), 4);
            let mut classes: Vec<CharClass> = password.chars().map(class_of).collect();
            classes.sort_by_key(|class| CharClass::ALL.iter().position(|c| c == class));
            assert_eq!(classes, CharClass::ALL.to_vec());
        }
    }

    #[test]
    fn test_generate_password_invalid_length() {
        let result = PasswordGenerator::with_options(3, true, true, true, true);
        assert_eq!(
            result.unwrap_err(),
            InvalidConfiguration::LengthTooShort { length: 3, min: MIN_LENGTH }
        );
        assert!(PasswordGenerator::with_options(0, true, false, false, false).is_err());
    }

    #[test]
    fn test_generate_password_huge_length() {
        let result = PasswordGenerator::with_options(usize::MAX, true, true, true, true);
        assert_eq!(
            result.unwrap_err(),
            InvalidConfiguration::LengthTooLong { length: usize::MAX, max: MAX_LENGTH }
        );
        assert!(PasswordGenerator::with_options(MAX_LENGTH + 1, true, false, false, false).is_err());

        let generator =
            PasswordGenerator::with_options(MAX_LENGTH, true, true, true, true).unwrap();
        assert_eq!(generator.generate().unwrap().len(), MAX_LENGTH);
    }

    #[test]
    fn test_generate_password_no_character_type() {
        // 构造时不检查字符类别，生成时才报错
        let generator = PasswordGenerator::with_options(4, false, false, false, false).unwrap();
        assert_eq!(generator.generate(), Err(InvalidConfiguration::NoCharacterType));
        assert_eq!(generator.charset(), Err(InvalidConfiguration::NoCharacterType));
    }

    #[test]
    fn test_generate_password_is_unpredictable() {
        let generator = PasswordGenerator::with_options(20, true, true, true, true).unwrap();
        let differing = (0..1000)
            .filter(|_| generator.generate().unwrap() != generator.generate().unwrap())
            .count();
        assert!(differing >= 999, "only {} of 1000 pairs differed", differing);
    }

    #[test]
    fn test_generate_password_with_seeded_rng() {
        let generator = PasswordGenerator::default();
        let first = generator
            .generate_with(&mut ChaCha20Rng::seed_from_u64(42))
            .unwrap();
        let second = generator
            .generate_with(&mut ChaCha20Rng::seed_from_u64(42))
            .unwrap();
        let other = generator
            .generate_with(&mut ChaCha20Rng::seed_from_u64(43))
            .unwrap();
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_generate_does_not_change_config() {
        let config = GeneratorConfig {
            length: 10,
            use_special: false,
            ..Default::default()
        };
        let generator = PasswordGenerator::new(config.clone()).unwrap();
        generator.generate().unwrap();
        assert_eq!(generator.config(), &config);
    }

    #[test]
    fn test_charset_order_and_size() {
        let generator = PasswordGenerator::default();
        let charset: String = generator.charset().unwrap().into_iter().collect();
        assert_eq!(charset.len(), 26 + 26 + 10 + 32);
        assert!(charset.starts_with("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"));
        assert!(charset.chars().skip(62).all(|c| c.is_ascii_punctuation()));

        let digits_only = PasswordGenerator::with_options(8, false, false, true, false).unwrap();
        assert_eq!(digits_only.charset().unwrap().len(), 10);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidConfiguration::NoCharacterType.to_string(),
            "Please select at least one character type"
        );
        assert_eq!(
            InvalidConfiguration::LengthTooShort { length: 2, min: 4 }.to_string(),
            "Password length must be an integer >= 4, got 2"
        );
    }
}
