//  ____  ____     __        __       ____
// |  _ \|  _ \ __ \ \      / /__    / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \   | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::fmt;

use log::{debug, warn};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest password the generator accepts.
pub const MIN_LENGTH: usize = 4;

/// Longest password the generator accepts.
pub const MAX_LENGTH: usize = 4096;

/// Length used when the caller does not ask for one.
pub const DEFAULT_LENGTH: usize = 16;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Why a configuration cannot produce a password.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidConfiguration {
    #[error("Password length must be an integer >= {min}, got {length}")]
    LengthTooShort { length: usize, min: usize },

    #[error("Password length must be <= {max}, got {length}")]
    LengthTooLong { length: usize, max: usize },

    #[error("Please select at least one character type")]
    NoCharacterType,

    #[error("Password length {length} is too short to include all {classes} selected character types")]
    LengthBelowClassCount { length: usize, classes: usize },
}

pub type Result<T> = std::result::Result<T, InvalidConfiguration>;

/// 字符类别，顺序固定：大写、小写、数字、特殊符号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "digits",
            CharClass::Special => "special",
        };
        f.write_str(name)
    }
}

/// Options a generator is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: usize,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_digits: bool,
    pub use_special: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_special: true,
        }
    }
}

impl GeneratorConfig {
    /// Enabled classes, in seeding order.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.use_upper,
            CharClass::Lower => self.use_lower,
            CharClass::Digit => self.use_digits,
            CharClass::Special => self.use_special,
        }
    }
}

/// Secure random password generator.
///
/// The length is checked when the generator is built; the selected character
/// types are checked each time a password is generated.
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    config: GeneratorConfig,
}

impl PasswordGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if config.length < MIN_LENGTH {
            warn!("rejected password length {}", config.length);
            return Err(InvalidConfiguration::LengthTooShort {
                length: config.length,
                min: MIN_LENGTH,
            });
        }
        if config.length > MAX_LENGTH {
            warn!("rejected password length {}", config.length);
            return Err(InvalidConfiguration::LengthTooLong {
                length: config.length,
                max: MAX_LENGTH,
            });
        }
        Ok(Self { config })
    }

    pub fn with_options(
        length: usize,
        use_upper: bool,
        use_lower: bool,
        use_digits: bool,
        use_special: bool,
    ) -> Result<Self> {
        Self::new(GeneratorConfig {
            length,
            use_upper,
            use_lower,
            use_digits,
            use_special,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn enabled_classes(&self) -> Vec<CharClass> {
        self.config.enabled_classes()
    }

    /// Union of the enabled alphabets, rebuilt on every call.
    pub fn charset(&self) -> Result<Vec<char>> {
        let charset: Vec<char> = self
            .enabled_classes()
            .into_iter()
            .flat_map(|class| class.alphabet().iter().map(|&b| b as char))
            .collect();
        if charset.is_empty() {
            return Err(InvalidConfiguration::NoCharacterType);
        }
        Ok(charset)
    }

    /// Generate a password using the operating system's random source.
    pub fn generate(&self) -> Result<String> {
        self.generate_with(&mut OsRng)
    }

    /// Generate a password drawing all randomness from `rng`.
    pub fn generate_with<R>(&self, rng: &mut R) -> Result<String>
    where
        R: RngCore + CryptoRng,
    {
        let charset = self.charset().inspect_err(|_| {
            warn!("no character type selected");
        })?;
        let classes = self.enabled_classes();
        let length = self.config.length;

        if length < classes.len() {
            warn!(
                "length {} cannot hold {} character types",
                length,
                classes.len()
            );
            return Err(InvalidConfiguration::LengthBelowClassCount {
                length,
                classes: classes.len(),
            });
        }

        debug!(
            "generating password: length={}, classes={:?}, charset size={}",
            length,
            classes,
            charset.len()
        );

        let mut password_chars = Vec::with_capacity(length);

        // 每个选中的类别先放一个字符
        for class in &classes {
            let alphabet = class.alphabet();
            password_chars.push(alphabet[rng.gen_range(0..alphabet.len())] as char);
        }

        for _ in 0..(length - classes.len()) {
            password_chars.push(charset[rng.gen_range(0..charset.len())]);
        }

        // Shuffle the characters to avoid predictable pattern
        password_chars.shuffle(rng);

        Ok(password_chars.into_iter().collect())
    }
}
