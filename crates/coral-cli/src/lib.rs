//! CLI library components for the coral catalog browser.

pub mod commands;
pub mod logging;
pub mod render;
