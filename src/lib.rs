//! Project configuration setup engine.
//!
//! Resolves which named options a user selected on the command line and
//! applies their configuration files: literal writes, in-place modifications,
//! and JSON deep-merge patches.  Malformed invocations print structured help
//! instead.
//!
//! The public API is organised into these layers:
//!
//! - **[`options`]** — the option data model, the name registry, and the TOML manifest
//! - **[`setup`]** — classify tokens, dispatch, render help, apply options
//! - **[`operations`]** — the file-system effects the applier runs against
//! - **[`commands`]** — top-level command orchestration (`setup`, `help`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod operations;
pub mod options;
pub mod setup;
