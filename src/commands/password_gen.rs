use log::info;

use crate::passgen::{self, GeneratorConfig, PasswordGenerator};

/// Class switches and length coming from the command line.
///
/// `None` / `false` leave the saved default untouched.
#[derive(Debug, Clone, Default)]
pub struct GenOverrides {
    pub length: Option<usize>,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_numbers: bool,
    pub no_special: bool,
}

impl GenOverrides {
    pub fn apply(&self, base: &GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            length: self.length.unwrap_or(base.length),
            use_upper: base.use_upper && !self.no_uppercase,
            use_lower: base.use_lower && !self.no_lowercase,
            use_digits: base.use_digits && !self.no_numbers,
            use_special: base.use_special && !self.no_special,
        }
    }
}

pub fn generate_random(config: GeneratorConfig) -> passgen::Result<String> {
    let generator = PasswordGenerator::new(config)?;
    let password = generator.generate()?;
    info!(
        "generated a {}-character password from {} character types",
        generator.config().length,
        generator.enabled_classes().len()
    );
    Ok(password)
}
