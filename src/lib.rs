pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod logic;
pub mod model;
pub mod models;
pub mod output;
pub mod storage;
