//! Library components of the regime column config inspector.

pub mod commands;
pub mod logging;
pub mod render;
