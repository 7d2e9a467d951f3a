use std::io::{BufRead, Write};

use tracing::info;

use crate::error::Result;
use crate::input::{read_line, trim_newlines};
use crate::output::{write_created, write_prompt, write_roster};
use crate::user_list::UserList;

/// Runs one interactive session on an empty [`UserList`] and returns the filled list.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<UserList> {
    run_with(UserList::new(), input, output)
}

/// Runs one interactive session appending to `list`.
///
/// Prompts for a name, appends it and reports its id, until `input` ends.
/// Then prints a blank line and the whole roster in insertion order.
///
/// Any append or write failure aborts the session before the roster is printed.
pub fn run_with<R: BufRead, W: Write>(
    mut list: UserList,
    mut input: R,
    mut output: W,
) -> Result<UserList> {
    let mut buf = Vec::new();

    loop {
        write_prompt(&mut output)?;
        let Some(line) = read_line(&mut input, &mut buf) else {
            break;
        };
        let id = list.append(trim_newlines(&line))?;
        write_created(&mut output, id)?;
    }

    write_roster(&mut output, &list)?;
    info!(users = list.len(), "session finished");
    Ok(list)
}
