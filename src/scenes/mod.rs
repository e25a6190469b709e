//! Screens other than the menu.
//!
//! Each scene is a set of draw functions over a `DrawTarget`; timing and
//! input handling live in the application state machine and the UI loop.

pub mod intro;
pub mod placeholder;
pub mod walk;
