// src/ui/table.rs
//! Tabular rendering of directory listings for `ls`.

use crossterm::style::Stylize;

use crate::fs::Entry;

const NAME_HEADER: &str = "Name";
const TYPE_HEADER: &str = "Type";
const GAP: usize = 2;

/// Print the Name/Type table for a listing. Rows are printed in the order
/// given; the caller is responsible for sorting.
pub fn print_listing(entries: &[Entry]) {
    let width = name_column_width(entries);
    println!("{}", format!("{NAME_HEADER:<width$}{TYPE_HEADER}").bold());
    for entry in entries {
        println!("{}", format_row(&entry.name, entry.kind.label(), width));
    }
}

/// Width of the name column: the longest name (or the header), plus a gap.
fn name_column_width(entries: &[Entry]) -> usize {
    entries
        .iter()
        .map(|e| e.name.chars().count())
        .chain([NAME_HEADER.len()])
        .max()
        .unwrap_or(NAME_HEADER.len())
        + GAP
}

fn format_row(name: &str, kind: &str, width: usize) -> String {
    format!("{name:<width$}{kind}")
}
