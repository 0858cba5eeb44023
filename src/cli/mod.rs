//! Command Line Interface (CLI) layer for VPCPLAN.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the planning driver: parse
//! source dimensions and optional crop rectangles, plan the batch, and
//! print the resulting geometry as JSON.
//!
//! If you are embedding VPCPLAN into another application, prefer using
//! the high-level `vpcplan::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
