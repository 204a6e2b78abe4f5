//  ____  ____     __        __       ____
// |  _ \|  _ \ __ \ \      / /__    / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \   | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-06-30
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure random password generator written in Rust.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use rpawogen::commands::password_gen::{GenOverrides, generate_random};
use rpawogen::configtool::{CONFIG_ENV, ConfigFile, resolve_config_path};

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "Generate a secure random password", long_about = None)]
struct Cli {
    /// Length of the password
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Path to the defaults file
    #[arg(long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Save the effective options as the new defaults
    #[arg(long, default_value_t = false)]
    save_defaults: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> GenOverrides {
        GenOverrides {
            length: self.length,
            no_uppercase: self.no_uppercase,
            no_lowercase: self.no_lowercase,
            no_numbers: self.no_numbers,
            no_special: self.no_special,
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config_path = resolve_config_path(cli.config.as_deref())
        .context("Failed to locate config file")?;
    let mut config_file = ConfigFile::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let options = cli.overrides().apply(&config_file.generator);
    let password = generate_random(options.clone())
        .context("Failed to generate password")?;

    if cli.save_defaults {
        config_file.generator = options;
        config_file
            .save(&config_path)
            .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
    }

    println!("{}", password);
    Ok(())
}
