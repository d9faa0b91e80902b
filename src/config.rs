// src/config.rs

// Prompt-layer policy for the interactive shell. The generator itself only
// requires length >= number of enabled classes; the 8-128 window and the
// default of 16 are usability rules applied by the prompts.
#[derive(Debug, Clone)]
pub struct Config {
    pub min_length: usize,
    pub max_length: usize,
    pub default_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            default_length: 16,
        }
    }
}
