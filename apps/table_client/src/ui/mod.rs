//! UI layer for the terminal front-end.

pub mod terminal;
