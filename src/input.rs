use std::io::BufRead;

use tracing::warn;

use crate::error::Result;
use crate::user_list::UserList;

/// Reads one line, terminator included, into `buf`.
///
/// Returns `None` at end of input. A read error also ends the input: it is
/// logged and treated exactly like end of input. Invalid UTF-8 is replaced,
/// not rejected.
pub fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Option<String> {
    buf.clear();
    match reader.read_until(b'\n', buf) {
        Ok(0) => None,
        Ok(_) => Some(String::from_utf8_lossy(buf).into_owned()),
        Err(err) => {
            warn!(%err, "input read failed, treating as end of input");
            None
        }
    }
}

/// Strips every trailing `\n`. Carriage returns are kept.
pub fn trim_newlines(line: &str) -> &str {
    line.trim_end_matches('\n')
}

/// Builds a list from every line of `reader`, without any prompting.
///
/// Input format: one name per line.
///
/// ```text
/// alice
/// bob
/// carol
/// ```
pub fn collect_names<R: BufRead>(mut reader: R) -> Result<UserList> {
    let mut list = UserList::new();
    let mut buf = Vec::new();
    while let Some(line) = read_line(&mut reader, &mut buf) {
        list.append(trim_newlines(&line))?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Cursor, Read};

    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn test_read_line_keeps_terminator() {
        let mut reader = Cursor::new("alice\nbob");
        let mut buf = Vec::new();
        assert_eq!(read_line(&mut reader, &mut buf).as_deref(), Some("alice\n"));
        assert_eq!(read_line(&mut reader, &mut buf).as_deref(), Some("bob"));
        assert_eq!(read_line(&mut reader, &mut buf), None);
    }

    #[test]
    fn test_read_error_ends_input() {
        let mut reader = BufReader::new(FailingReader);
        let mut buf = Vec::new();
        assert_eq!(read_line(&mut reader, &mut buf), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut reader = Cursor::new(vec![b'a', 0xff, b'\n']);
        let mut buf = Vec::new();
        assert_eq!(read_line(&mut reader, &mut buf).as_deref(), Some("a\u{fffd}\n"));
    }

    #[test]
    fn test_trim_newlines() {
        assert_eq!(trim_newlines("alice\n"), "alice");
        assert_eq!(trim_newlines("alice\n\n\n"), "alice");
        assert_eq!(trim_newlines("alice\r\n"), "alice\r");
        assert_eq!(trim_newlines("\n"), "");
        assert_eq!(trim_newlines("a\nb"), "a\nb");
    }

    #[test]
    fn test_collect_names() {
        let list = collect_names(Cursor::new("alice\n\nbob\r\n")).unwrap();
        let roster: Vec<_> = list.iter().collect();
        assert_eq!(roster, vec![(0, "alice"), (1, ""), (2, "bob\r")]);
    }
}
