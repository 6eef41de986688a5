//! CLI library components for the colic encoder.

pub mod cli;
pub mod commands;
pub mod failure;
pub mod help;
pub mod logging;
pub mod summary;
