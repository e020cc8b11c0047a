//! Terminal front end: command parsing, text rendering and the input loop.

pub mod command;
pub mod render;
pub mod terminal;
