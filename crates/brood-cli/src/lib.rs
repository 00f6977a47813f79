//! Library components of the `brood` command.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod render;
