//! LineCode CLI library.
//!
//! Request loading and the command implementations behind the `linecode`
//! binary. Commands return an [`std::process::ExitCode`] so integration
//! tests can drive them without spawning a process.

pub mod commands;
pub mod input;
