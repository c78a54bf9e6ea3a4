// src/app/state.rs
//! Session state and command dispatch.

use std::io::{self, Write};
use std::path::Path;

use crate::command::Command;
use crate::fs::{self, ops, Cursor};
use crate::ui::{output, table};

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Main session state: the username shown in the banner and the path
/// cursor. The cursor is the only state a command may mutate, and only
/// `cd`/`up` ever do.
pub struct App {
    pub username: String,
    pub cursor: Cursor,
}

impl App {
    /// Create a session rooted at the user's home directory.
    pub fn new(username: String) -> Self {
        Self {
            username,
            cursor: Cursor::from_home(),
        }
    }

    /// Create a session rooted at an arbitrary directory.
    pub fn rooted_at(username: String, root: &Path) -> Self {
        Self {
            username,
            cursor: Cursor::from_path(root),
        }
    }

    /// Run one command to completion.
    ///
    /// Every failure is converted here into exactly one printed message plus
    /// a blank line; nothing escapes to the session loop. A failed command
    /// leaves the cursor exactly as it was.
    pub fn dispatch(&mut self, command: Command) -> Flow {
        match command {
            Command::Exit => {
                output::farewell(&self.username);
                return Flow::Exit;
            }
            Command::Up => self.cursor.pop(),
            Command::Cd(path) => match ops::open_dir(&self.cursor.resolve(&path), &path) {
                Ok(()) => self.cursor.push(&path),
                Err(err) => output::error(err),
            },
            Command::Ls => match fs::load_entries(&self.cursor.as_path()) {
                Ok(entries) => table::print_listing(&entries),
                Err(err) => output::error(err),
            },
            Command::Cat(file) => {
                let mut stdout = io::stdout().lock();
                if let Err(err) = ops::cat(&self.cursor.resolve(&file), &mut stdout) {
                    let _ = stdout.flush();
                    drop(stdout);
                    output::error(err);
                }
            }
            Command::Add(file) => {
                if let Err(err) = ops::add(&self.cursor.resolve(&file)) {
                    output::error(err);
                }
            }
            Command::Rename { from, to } => {
                let result = ops::rename(&self.cursor.resolve(&from), &self.cursor.resolve(&to));
                if let Err(err) = result {
                    output::error(err);
                }
            }
            Command::Copy { from, to } => {
                let result = ops::copy(&self.cursor.resolve(&from), &self.cursor.resolve(&to));
                if let Err(err) = result {
                    output::error(err);
                }
            }
            Command::Move { from, dest } => {
                let result = ops::move_file(&self.cursor.resolve(&from), &self.cursor.resolve(&dest));
                if let Err(err) = result {
                    output::error(err);
                }
            }
            // Unknown keywords and incomplete commands are silently ignored.
            Command::Noop => {}
        }
        Flow::Continue
    }
}
