//! Interactive command-line generator for strong random passwords.
//!
//! The core lives in [`generator`]: given a length and a set of enabled
//! character classes it synthesizes a password in which every enabled class
//! appears at least once, drawing all randomness from the operating system
//! CSPRNG. The [`cli`] module wraps the core in the prompts the binary runs.

pub mod cli;
pub mod config;
pub mod generator;
pub mod models;

pub use config::Config;
pub use generator::{generate_password, GeneratorError};
pub use models::{CharacterClass, PasswordRequest};

/// Default cryptographically secure RNG.
pub(crate) fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}
