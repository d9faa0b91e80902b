// src/cli/menu.rs
use std::error::Error;

use console::style;
use inquire::{Confirm, InquireError, Text};

use crate::config::Config;
use crate::generator;
use crate::models::PasswordRequest;

/// Print the startup banner.
pub fn print_banner() {
    println!("\n╔═══════════════════════════════════════╗");
    println!("║     🔐 Secure Password Generator      ║");
    println!("╚═══════════════════════════════════════╝");
    println!("This tool generates strong, random passwords.\n");
}

/// Run the interactive prompt loop until the user declines another password.
///
/// Cancelling a prompt (Esc or Ctrl-C) ends the session the same way as
/// answering "no", so the process still exits cleanly.
pub fn run_menu(config: &Config) -> Result<(), Box<dyn Error>> {
    print_banner();

    loop {
        match run_once(config) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                println!();
                break;
            }
            Err(err) => return Err(Box::new(err)),
        }
    }

    println!("👋 Exited successfully.");
    println!();
    Ok(())
}

// One full round: collect a request, show the password, ask about another.
// Returns whether the user wants to keep going.
fn run_once(config: &Config) -> Result<bool, InquireError> {
    let request = prompt_request(config)?;

    match generator::generate_password(&request) {
        Ok(password) => {
            log::debug!(
                "generated a {} character password from {} classes",
                password.chars().count(),
                request.enabled_classes().len()
            );
            println!("\nYour generated password:\n");
            println!("{}", style(password).green().bold());
            println!();
        }
        Err(err) => {
            log::warn!("password request rejected: {}", err);
            println!("❌ Error: {}", err);
            println!("Please try again.\n");
            return Ok(true);
        }
    }

    confirm("Generate another password?", false)
}

fn prompt_request(config: &Config) -> Result<PasswordRequest, InquireError> {
    let length = prompt_length(config)?;

    let include_lowercase = confirm("Include lowercase letters (a-z)?", true)?;
    let include_uppercase = confirm("Include uppercase letters (A-Z)?", true)?;
    let include_digits = confirm("Include digits (0-9)?", true)?;
    let include_symbols = confirm("Include symbols (!@#$, etc.)?", true)?;

    let request = PasswordRequest {
        length,
        include_lowercase,
        include_uppercase,
        include_digits,
        include_symbols,
    };

    if request.enabled_classes().is_empty() {
        println!("⚠️ You disabled all character types. Using lowercase + digits instead.");
        return Ok(PasswordRequest::fallback(length));
    }

    Ok(request)
}

// Re-prompts until the answer is an integer inside the configured window.
fn prompt_length(config: &Config) -> Result<usize, InquireError> {
    let default = config.default_length.to_string();
    let message = format!(
        "Enter password length ({}-{}):",
        config.min_length, config.max_length
    );

    loop {
        let answer = Text::new(&message).with_default(&default).prompt()?;

        match parse_length(&answer, config) {
            LengthAnswer::Accepted(length) => return Ok(length),
            LengthAnswer::OutOfRange => println!(
                "❌ Please enter a number between {} and {}.",
                config.min_length, config.max_length
            ),
            LengthAnswer::NotANumber => println!("❌ Please enter a valid integer."),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LengthAnswer {
    Accepted(usize),
    OutOfRange,
    NotANumber,
}

// Blank and whitespace-only answers mean the default length.
fn parse_length(answer: &str, config: &Config) -> LengthAnswer {
    let answer = answer.trim();
    if answer.is_empty() {
        return LengthAnswer::Accepted(config.default_length);
    }

    match answer.parse::<usize>() {
        Ok(length) if (config.min_length..=config.max_length).contains(&length) => {
            LengthAnswer::Accepted(length)
        }
        Ok(_) => LengthAnswer::OutOfRange,
        Err(_) => LengthAnswer::NotANumber,
    }
}

fn confirm(message: &str, default: bool) -> Result<bool, InquireError> {
    let parser = move |answer: &str| parse_yes_no(answer, default);
    Confirm::new(message)
        .with_default(default)
        .with_parser(&parser)
        .with_error_message("Please enter 'y' or 'n'.")
        .prompt()
}

// Truly empty input never reaches the parser (inquire substitutes the
// default first); whitespace-only answers do, and mean the default too.
fn parse_yes_no(answer: &str, default: bool) -> Result<bool, ()> {
    match answer.trim().to_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yes_variants() {
        for answer in ["y", "Y", "yes", "YES", "Yes", " y "] {
            assert_eq!(parse_yes_no(answer, false), Ok(true), "answer {:?}", answer);
        }
    }

    #[test]
    fn parses_no_variants() {
        for answer in ["n", "N", "no", "NO", "No", " no "] {
            assert_eq!(parse_yes_no(answer, true), Ok(false), "answer {:?}", answer);
        }
    }

    #[test]
    fn blank_answers_fall_back_to_the_default() {
        for default in [true, false] {
            for answer in ["", " ", "\t", "   "] {
                assert_eq!(
                    parse_yes_no(answer, default),
                    Ok(default),
                    "answer {:?} with default {}",
                    answer,
                    default
                );
            }
        }
    }

    #[test]
    fn rejects_everything_else() {
        for answer in ["maybe", "yep", "nah", "0", "true"] {
            assert_eq!(parse_yes_no(answer, true), Err(()), "answer {:?}", answer);
            assert_eq!(parse_yes_no(answer, false), Err(()), "answer {:?}", answer);
        }
    }

    #[test]
    fn blank_length_answers_fall_back_to_the_default() {
        let config = Config::default();
        for answer in ["", "  ", "\t"] {
            assert_eq!(
                parse_length(answer, &config),
                LengthAnswer::Accepted(config.default_length),
                "answer {:?}",
                answer
            );
        }
    }

    #[test]
    fn length_answers_are_trimmed_and_range_checked() {
        let config = Config::default();
        assert_eq!(parse_length("16", &config), LengthAnswer::Accepted(16));
        assert_eq!(parse_length(" 8 ", &config), LengthAnswer::Accepted(8));
        assert_eq!(parse_length("128", &config), LengthAnswer::Accepted(128));
        assert_eq!(parse_length("7", &config), LengthAnswer::OutOfRange);
        assert_eq!(parse_length("129", &config), LengthAnswer::OutOfRange);
        assert_eq!(parse_length("sixteen", &config), LengthAnswer::NotANumber);
        assert_eq!(parse_length("12.5", &config), LengthAnswer::NotANumber);
    }
}
