//! Acquisition and edit flows shared by the interactive session.
//!
//! Every flow takes a [`Console`] (and an rng where generation can occur),
//! so the full prompt/response behavior runs unchanged against a scripted
//! console in tests.

use num_bigint::BigUint;
use rand::Rng;
use zeroize::Zeroize;

use crate::console::Console;
use crate::encoding::string_to_number;
use crate::error::{AccountError, Result};
use crate::generator::{create_password, parse_length};
use crate::models::{AccountRecord, SecurityQuestion};
use crate::utils::is_valid_url;

/// Run the full acquisition sequence and assemble the record.
///
/// Order is fixed: website, username, password, security questions.
pub fn acquire_account<C: Console, R: Rng>(console: &mut C, rng: &mut R) -> Result<AccountRecord> {
    let (website_name, website_url) = acquire_website(console)?;
    let username = acquire_username(console)?;
    let password_number = acquire_password(console, rng)?;
    let security_questions = acquire_security_questions(console)?;

    Ok(AccountRecord::new(
        website_name,
        website_url,
        username,
        password_number,
        security_questions,
    ))
}

/// Read the website name and an optional URL.
///
/// The name is accepted as typed. The URL is optional: empty input skips
/// it, anything else must pass the validator. Invalid input re-prompts
/// until the user supplies a valid URL or presses ENTER to skip after all.
pub fn acquire_website<C: Console>(console: &mut C) -> Result<(String, Option<String>)> {
    let name = console.read_line("Enter the name of the website for the account: ")?;

    let mut url = console.read_line("Enter the website URL (press ENTER to skip): ")?;
    loop {
        if url.is_empty() {
            return Ok((name, None));
        }
        if is_valid_url(&url) {
            return Ok((name, Some(url)));
        }
        url = console.read_line("Invalid URL. Enter a valid URL or press ENTER to skip: ")?;
    }
}

/// Read the username. Free-form; empty input is accepted.
pub fn acquire_username<C: Console>(console: &mut C) -> Result<String> {
    console.read_line("Enter the username for the login: ")
}

/// Read or generate a password and return its numeric encoding.
///
/// Empty input hands off to the generation sub-flow. The typed or
/// generated characters are encoded and then wiped; only the number
/// leaves this function.
pub fn acquire_password<C: Console, R: Rng>(console: &mut C, rng: &mut R) -> Result<BigUint> {
    let mut password =
        console.read_line("Enter the password for the login (press ENTER for a generated password): ")?;
    if password.is_empty() {
        password = generate_via_prompts(console, rng)?;
    }

    let number = string_to_number(&password);
    password.zeroize();
    number
}

/// Collect security question/answer pairs until an empty question ends
/// the loop.
///
/// Re-entering a question replaces its stored answer in place. Zero pairs
/// yield `None`.
pub fn acquire_security_questions<C: Console>(
    console: &mut C,
) -> Result<Option<Vec<SecurityQuestion>>> {
    let mut questions: Vec<SecurityQuestion> = Vec::new();

    loop {
        let question = console.read_line("Enter a security question (press ENTER to finish): ")?;
        if question.is_empty() {
            break;
        }
        let answer = console.read_line("Enter the answer to the security question: ")?;

        match questions.iter().position(|q| q.question == question) {
            Some(index) => questions[index].answer = answer,
            None => questions.push(SecurityQuestion { question, answer }),
        }
    }

    if questions.is_empty() {
        Ok(None)
    } else {
        Ok(Some(questions))
    }
}

/// Replace the record's password with a different one.
///
/// Empty input runs the generation sub-flow. A candidate whose encoding
/// equals the current one is refused and the prompt repeats; on success
/// the old encoding moves into the history.
pub fn change_password<C: Console, R: Rng>(
    record: &mut AccountRecord,
    console: &mut C,
    rng: &mut R,
) -> Result<()> {
    loop {
        let mut candidate = console
            .read_line("Enter a new password for the login (press ENTER for a generated password): ")?;
        if candidate.is_empty() {
            candidate = generate_via_prompts(console, rng)?;
        }

        let number = string_to_number(&candidate);
        candidate.zeroize();
        let number = number?;

        if number == record.password_number {
            console.write_line(
                "The new password matches the current one. Choose a different password.",
            );
            continue;
        }

        record.set_password(number);
        console.write_line("Password changed successfully.");
        return Ok(());
    }
}

/// Replace the record's username unconditionally.
pub fn change_username<C: Console>(record: &mut AccountRecord, console: &mut C) -> Result<()> {
    let new_username = console.read_line("Enter a new username for the login: ")?;
    let old = record.set_username(new_username);
    console.write_line(&format!(
        "Username changed from '{}' to '{}'.",
        old, record.username
    ));
    Ok(())
}

/// Prompt for bounds and generate a password, showing it to the user.
///
/// Each bound re-prompts on non-numeric input; the minimum additionally
/// re-prompts below `1` so a generated password is never empty. Inverted
/// bounds report the range error and restart from the minimum.
fn generate_via_prompts<C: Console, R: Rng>(console: &mut C, rng: &mut R) -> Result<String> {
    loop {
        let min_length = prompt_length(console, "Enter minimum length for the password: ", 1)?;
        let max_length = prompt_length(
            console,
            "Enter maximum length for the password (0 for no maximum): ",
            0,
        )?;

        match create_password(min_length, max_length, rng) {
            Ok(password) => {
                console.write_line(&format!("The generated password is: {password}"));
                return Ok(password);
            }
            Err(err @ AccountError::InvalidRange { .. }) => {
                console.write_line(&err.to_string());
            }
            Err(err) => return Err(err),
        }
    }
}

/// Read one length bound, looping until the input parses and meets `floor`.
fn prompt_length<C: Console>(console: &mut C, prompt: &str, floor: usize) -> Result<usize> {
    loop {
        let raw = console.read_line(prompt)?;
        match parse_length(&raw) {
            Ok(value) if value >= floor => return Ok(value),
            Ok(_) => console.write_line(&format!("The length must be at least {floor}.")),
            Err(err) => console.write_line(&err.to_string()),
        }
    }
}
