// src/app/mod.rs
//! Application module - session state and command dispatch.

pub mod state;

// Re-export the App struct
pub use state::{App, Flow};
