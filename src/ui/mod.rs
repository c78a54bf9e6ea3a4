// src/ui/mod.rs
//! Console rendering: session messages and the `ls` table.

pub mod output;
pub mod table;
