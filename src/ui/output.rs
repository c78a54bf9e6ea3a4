// src/ui/output.rs
//! Console output for the session: banner, cursor line and error reporting.
//!
//! Everything goes to stdout, errors included; the shell's output is one
//! interleaved conversation, not two channels.

use crossterm::style::Stylize;

/// Print the startup banner.
pub fn welcome(username: &str) {
    println!("{}", format!("Welcome to the File Manager, {username}!").bold());
}

/// Print the farewell line. Called on `.exit`, EOF and Ctrl+C.
pub fn farewell(username: &str) {
    println!(
        "{}",
        format!("Thank you for using File Manager, {username}, goodbye!").bold()
    );
}

/// Print the cursor line shown after every command.
pub fn current_path(rendered: &str) {
    println!("You are currently in {}", rendered.cyan());
}

/// Print an error message followed by a blank line.
pub fn error(message: impl std::fmt::Display) {
    println!("{message}\n");
}
