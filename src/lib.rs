pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod length;
pub mod random;

pub use charset::{Alphabet, CharacterSet, compose_alphabet};
pub use config::{GenerationConfig, Overrides, Preset};
pub use error::{Error, Result};
pub use generator::{generate_from_alphabet, generate_password, generate_with};
pub use length::{MAX_LENGTH, MIN_LENGTH, check_length, validate_length};
pub use random::{OsRandom, RandomSource};
