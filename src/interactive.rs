//! Interactive mode: build one account record, then edit it from a shell.

use crate::console::StdioConsole;
use crate::error::{AccountError, Result};
use crate::models::AccountRecord;
use crate::operations;
use crate::utils::{self, success, warning};
use colored::*;
use dialoguer::Confirm;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Interactive account shell.
pub struct InteractiveSession {
    record: AccountRecord,
    editor: DefaultEditor,
}

impl InteractiveSession {
    /// Acquire the initial record and prepare the command loop.
    pub fn new() -> Result<Self> {
        for warn in utils::check_runtime_warnings() {
            warning(&warn);
        }

        if atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout) {
            print_welcome();
        }

        let mut console = StdioConsole;
        let record = operations::acquire_account(&mut console, &mut rand::thread_rng())?;
        success("Account record created");

        let editor = DefaultEditor::new()
            .map_err(|_| AccountError::Other("Failed to create line editor".to_string()))?;

        Ok(Self { record, editor })
    }

    /// Run the interactive loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let prompt = format!("{} ", "account>".cyan());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    // Add to history
                    let _ = self.editor.add_history_entry(line);

                    if let Err(e) = self.execute_command(line) {
                        eprintln!("{} {}", "Error:".red(), e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("\nUse 'exit' to quit");
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Execute a command.
    fn execute_command(&mut self, input: &str) -> Result<()> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            return Ok(());
        }

        match parts[0] {
            "help" | "?" => {
                self.show_help();
                Ok(())
            }
            "show" => {
                self.show_record();
                Ok(())
            }
            "json" => {
                self.show_json();
                Ok(())
            }
            "username" => operations::change_username(&mut self.record, &mut StdioConsole),
            "password" => operations::change_password(
                &mut self.record,
                &mut StdioConsole,
                &mut rand::thread_rng(),
            ),
            "new" => self.rebuild_record(),
            "clear" => {
                utils::clear_screen();
                Ok(())
            }
            "exit" | "quit" => {
                std::process::exit(0);
            }
            _ => {
                eprintln!(
                    "Unknown command: {}. Type 'help' for available commands.",
                    parts[0]
                );
                Ok(())
            }
        }
    }

    /// Show help message.
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold());
        println!("  {}      - Show this help", "help".cyan());
        println!("  {}      - Show the account record", "show".cyan());
        println!("  {}      - Print the record summary as JSON", "json".cyan());
        println!("  {}  - Change the username", "username".cyan());
        println!("  {}  - Change the password", "password".cyan());
        println!("  {}       - Discard the record and build a new one", "new".cyan());
        println!("  {}     - Clear screen", "clear".cyan());
        println!("  {}      - Exit the session", "exit".cyan());
        println!();
    }

    /// Show the record without secret material.
    fn show_record(&self) {
        let summary = self.record.summary();

        println!("\n{}", "Account Record:".bold());
        println!("  {}: {}", "Website".bold(), summary.website_name);
        match &summary.website_url {
            Some(url) => println!("  {}: {}", "URL".bold(), url),
            None => println!("  {}: {}", "URL".bold(), "(none)".yellow()),
        }
        println!("  {}: {}", "Username".bold(), summary.username);
        println!(
            "  {}: {} digits (encoded)",
            "Password".bold(),
            summary.password_digits
        );
        println!(
            "  {}: {}",
            "Security questions".bold(),
            summary.security_questions
        );
        println!(
            "  {}: {}",
            "Password changes".bold(),
            summary.password_changes
        );
        println!();
    }

    /// Print the record summary as JSON.
    fn show_json(&self) {
        let summary = self.record.summary();
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    }

    /// Discard the record and run acquisition again.
    fn rebuild_record(&mut self) -> Result<()> {
        let confirmed = Confirm::new()
            .with_prompt("Discard the current record and build a new one?")
            .default(false)
            .interact()
            .map_err(|e| AccountError::Other(e.to_string()))?;

        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }

        let mut console = StdioConsole;
        self.record = operations::acquire_account(&mut console, &mut rand::thread_rng())?;
        success("New account record created");
        Ok(())
    }
}

/// Print welcome message.
fn print_welcome() {
    println!("\n{}", "Account Builder Interactive Mode".bold().cyan());
    println!("Answer the prompts to build an account record, then type 'help' for commands\n");
}
