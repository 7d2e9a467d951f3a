//! Reads usernames from stdin, one per line, then prints the roster.
//!
//! ```text
//! $ printf 'alice\nbob\n' | userring
//! username: created user with id 0
//! username: created user with id 1
//! username:
//! user 0: alice
//! user 1: bob
//! ```
use std::io;
use std::process::ExitCode;

use tracing::error;
use userring::{logging, session};

fn main() -> ExitCode {
    logging::init();

    match session::run(io::stdin().lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            ExitCode::FAILURE
        }
    }
}
