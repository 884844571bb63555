//! Command implementations behind the `isconnected` binary.

pub mod commands;
