// src/cli/mod.rs
use clap::Parser;

pub mod menu;

/// Interactive generator for strong random passwords.
///
/// Every generation input (length, character classes) is collected through
/// prompts, so the binary takes no generation flags of its own.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {}
