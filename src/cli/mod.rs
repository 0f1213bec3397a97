pub mod commands;
pub mod task;

pub use commands::*;
