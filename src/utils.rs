//! URL validation and terminal helpers.

use colored::*;
use url::Url;

/// Check whether a string is an acceptable account URL.
///
/// Acceptable means the WHATWG parser accepts it as an absolute URL and the
/// result carries a host. Bare domains without a scheme do not parse, and
/// scheme-only forms such as `mailto:user@example.com` parse without a host;
/// both are rejected.
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.host().is_some(),
        Err(_) => false,
    }
}

/// Print an error message and exit.
pub fn error_exit(message: &str, code: i32) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), message);
    std::process::exit(code);
}

/// Print a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print a warning message.
pub fn warning(message: &str) {
    println!("{} {}", "Warning:".yellow(), message);
}

/// Clear the terminal screen.
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    use std::io::{self, Write};
    let _ = io::stdout().flush();
}

/// Environment warnings worth surfacing before an interactive session.
pub fn check_runtime_warnings() -> Vec<String> {
    let mut warnings = Vec::new();

    #[cfg(unix)]
    {
        // A credentials tool should not be driven as root.
        if unsafe { libc::geteuid() } == 0 {
            warnings.push("Running as root is not recommended".to_string());
        }
    }

    warnings
}
