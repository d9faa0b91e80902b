// src/models.rs

/// The four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Every class, in the order the shell prompts for them.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    /// Fixed alphabet for this class. All ASCII; the classes never overlap.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Digits => b"0123456789",
            CharacterClass::Symbols => b"!@#$%^&*()-_=+[]{};:,.?/",
        }
    }

    /// Whether `c` belongs to this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}

// Password generation request
#[derive(Debug, Clone)]
pub struct PasswordRequest {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl PasswordRequest {
    /// Classes enabled by this request, in prompt order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::with_capacity(CharacterClass::ALL.len());
        if self.include_lowercase {
            classes.push(CharacterClass::Lowercase);
        }
        if self.include_uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if self.include_digits {
            classes.push(CharacterClass::Digits);
        }
        if self.include_symbols {
            classes.push(CharacterClass::Symbols);
        }
        classes
    }

    /// Substitute request used when the user turns every class off:
    /// lowercase letters plus digits at the same length.
    pub fn fallback(length: usize) -> Self {
        Self {
            length,
            include_lowercase: true,
            include_uppercase: false,
            include_digits: true,
            include_symbols: false,
        }
    }
}
