//! Page template and terminal surfaces for the interactive front end.

pub mod drop_input;
pub mod picker;
pub mod terminal;
pub mod views;
