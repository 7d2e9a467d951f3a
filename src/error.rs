use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

use crate::user::UserId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("user id counter exhausted after {limit} users")]
    Capacity { limit: UserId },
    #[error("cannot allocate user record: {0}")]
    Alloc(#[from] TryReserveError),
    #[error("cannot write output: {0}")]
    WriteFailed(#[from] io::Error),
    #[error("malformed image at {address:#x}: {reason}")]
    MalformedImage { address: u64, reason: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
