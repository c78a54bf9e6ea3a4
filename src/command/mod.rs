// src/command/mod.rs
//! Command vocabulary and line parsing.
//!
//! An input line is converted into a closed `Command` value; the dispatcher
//! matches it exhaustively. Parsing is total: empty lines, unknown keywords
//! and missing arguments all come back as `Noop`, never as an error. The
//! shell deliberately stays forgiving about malformed input.

/// One parsed command invocation. Constructed fresh per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `.exit` - print the farewell and terminate.
    Exit,
    /// `up` - ascend one cursor level.
    Up,
    /// `cd <path>` - descend into a directory.
    Cd(String),
    /// `ls` - list the cursor directory.
    Ls,
    /// `cat <file>` - stream a file to stdout.
    Cat(String),
    /// `add <file>` - create a new empty file.
    Add(String),
    /// `rn <old> <new>` - rename within the cursor directory.
    Rename { from: String, to: String },
    /// `cp <old> <new>` - byte-copy within the cursor directory.
    Copy { from: String, to: String },
    /// `mv <old> <dest>` - copy into `dest`, then delete the original.
    Move { from: String, dest: String },
    /// Anything unrecognized or incomplete; dispatch ignores it silently.
    Noop,
}

impl Command {
    /// Parse a raw input line. Keywords match case-insensitively; arguments
    /// are positional and whitespace-delimited.
    pub fn parse(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, args)) = tokens.split_first() else {
            return Command::Noop;
        };

        match (keyword.to_lowercase().as_str(), args) {
            (".exit", _) => Command::Exit,
            ("up", _) => Command::Up,
            ("ls", _) => Command::Ls,
            ("cd", [path, ..]) => Command::Cd((*path).to_owned()),
            ("cat", [file, ..]) => Command::Cat((*file).to_owned()),
            ("add", [file, ..]) => Command::Add((*file).to_owned()),
            ("rn", [from, to, ..]) => Command::Rename {
                from: (*from).to_owned(),
                to: (*to).to_owned(),
            },
            ("cp", [from, to, ..]) => Command::Copy {
                from: (*from).to_owned(),
                to: (*to).to_owned(),
            },
            ("mv", [from, dest, ..]) => Command::Move {
                from: (*from).to_owned(),
                dest: (*dest).to_owned(),
            },
            _ => Command::Noop,
        }
    }
}
