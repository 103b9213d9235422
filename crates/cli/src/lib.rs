//! Rust Prompt CLI Library
//!
//! This crate provides the `rp` binary, which exposes the prompts of
//! rust-prompt-core to shell scripts. Each subcommand asks one question on the
//! terminal and prints the answer on stdout.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`commands`]: Running the requested prompt and rendering its answer
//! - [`colors`]: Theme colors for the printed answer and errors
//!
//! # Examples
//!
//! ```bash
//! # Free text, giving up after 30 seconds
//! rp --timeout 30 read-line "What's your name? "
//!
//! # Yes/no, exit status 1 on "no"
//! rp confirm --strict "Deploy to production?" && ./deploy.sh
//!
//! # Numbered menu, prints the picked index
//! rp select "Environment?" dev staging prod
//!
//! # Several picks, prints e.g. `0,2`
//! rp select --multiple --paging 5 "Services?" api web worker cron
//! ```

pub mod cli_args;
pub mod colors;
pub mod commands;
