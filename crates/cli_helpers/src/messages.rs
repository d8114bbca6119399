//! Colored messages written to the terminal.
use colored::Colorize;
use std::fmt::Display;

/// Print a success message.
pub fn success(message: impl Display) {
    println!("{} {}", "✓".green(), message);
}

/// Print an informational message.
pub fn info(message: impl Display) {
    println!("{}", message.to_string().cyan());
}

/// Print a warning message to stderr.
pub fn warn(message: impl Display) {
    eprintln!("{} {}", "WARN".yellow().bold(), message);
}

/// Print an error message to stderr and exit the process.
pub fn fail(message: impl Display) -> ! {
    eprintln!("{} {}", "ERROR".red().bold(), message);
    std::process::exit(1);
}

/// Format a label so it stands out in a line of output.
pub fn heading(label: impl Display) -> String {
    label.to_string().bold().to_string()
}
