//! # feira-calc Entry Point
//!
//! ```text
//! feira-calc [--config <path>] [request.json]
//!
//!   request.json ──► dispatch ──► stdout (JSON response)
//!   (or stdin)                    exit 0 on success
//!                                 exit 1 with { code, message } on failure
//!                                 exit 2 on usage/config/input problems
//! ```
//!
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    feira_calc::run()
}
