use std::io::{self, Write};

use crate::user::UserId;
use crate::user_list::UserList;

pub const PROMPT: &str = "username: ";

/// Writes [`PROMPT`] and flushes, so it shows up before the next read blocks.
pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()
}

pub fn write_created<W: Write>(out: &mut W, id: UserId) -> io::Result<()> {
    writeln!(out, "created user with id {id}")
}

/// Writes a blank separator line followed by one `user <id>: <name>` line per user.
pub fn write_roster<W: Write>(out: &mut W, list: &UserList) -> io::Result<()> {
    writeln!(out)?;
    for (id, name) in list.iter() {
        writeln!(out, "user {id}: {name}")?;
    }
    out.flush()
}
