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

pub mod commands;
pub mod configtool;
pub mod passgen;

pub use passgen::{CharClass, GeneratorConfig, InvalidConfiguration, PasswordGenerator};
