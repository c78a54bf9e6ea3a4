// src/lib.rs
//! File Manager - an interactive, line-driven file-navigation shell.
//!
//! This library provides the session state, the command vocabulary and the
//! filesystem handlers behind the `file-manager` binary.

pub mod app;
pub mod command;
pub mod fs;
pub mod repl;
pub mod ui;
