// src/repl.rs
//! The session loop: read one line, run it to completion, re-render the
//! cursor, repeat. One logical thread, so commands are totally ordered and
//! never interleave.

use std::io::{self, BufRead};

use anyhow::Result;

use crate::app::{App, Flow};
use crate::command::Command;
use crate::ui::output;

/// Run the interactive session until `.exit` or end of input.
pub fn run(username: String) -> Result<()> {
    let mut app = App::new(username);
    output::welcome(&app.username);
    output::current_path(&app.cursor.render());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF gets the same farewell as `.exit`.
            output::farewell(&app.username);
            break;
        }
        if app.dispatch(Command::parse(&line)) == Flow::Exit {
            break;
        }
        // Unconditional, even after errors and no-ops.
        output::current_path(&app.cursor.render());
    }
    Ok(())
}
