// src/generator.rs
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::PasswordRequest;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be enabled.")]
    NoClassesEnabled,
    #[error("Password length must be at least {required} for the selected character types.")]
    LengthTooShort { required: usize, requested: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Generate a random password satisfying `request`.
///
/// Every enabled character class is guaranteed to appear at least once,
/// which requires `request.length` to be at least the number of enabled
/// classes. All randomness comes from the operating system CSPRNG.
pub fn generate_password(request: &PasswordRequest) -> Result<String> {
    let mut rng = crate::csprng();

    let classes = request.enabled_classes();
    if classes.is_empty() {
        return Err(GeneratorError::NoClassesEnabled);
    }
    if request.length < classes.len() {
        return Err(GeneratorError::LengthTooShort {
            required: classes.len(),
            requested: request.length,
        });
    }

    let combined: Vec<u8> = classes
        .iter()
        .flat_map(|class| class.alphabet())
        .copied()
        .collect();

    let mut password: Vec<char> = Vec::with_capacity(request.length);

    // One draw per enabled class so each one is guaranteed to appear.
    for class in &classes {
        let alphabet = class.alphabet();
        password.push(alphabet[rng.gen_range(0..alphabet.len())] as char);
    }

    // Fill the rest from the union of the enabled alphabets.
    for _ in classes.len()..request.length {
        password.push(combined[rng.gen_range(0..combined.len())] as char);
    }

    // Shuffle so the guaranteed characters are not stuck at the front.
    password.shuffle(&mut rng);

    Ok(password.into_iter().collect())
}
