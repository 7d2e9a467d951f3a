use std::fmt;

/// Width of the stored name buffer, terminator slot included.
pub const MAX_USERNAME_LEN: usize = 32;

/// Identifier handed out by [`crate::UserList::append`].
pub type UserId = u32;

/// Fixed-width user name.
///
/// Holds at most `MAX_USERNAME_LEN - 1` bytes; the last byte of the buffer
/// stays zero like a C string terminator would. Longer input is cut at the
/// last character boundary that fits, so the stored text is always valid UTF-8.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Username {
    buf: [u8; MAX_USERNAME_LEN],
    len: u8,
}

impl Username {
    pub fn new(name: &str) -> Self {
        let mut len = name.len().min(MAX_USERNAME_LEN - 1);
        while !name.is_char_boundary(len) {
            len -= 1;
        }

        let mut buf = [0u8; MAX_USERNAME_LEN];
        buf[..len].copy_from_slice(&name.as_bytes()[..len]);

        Self {
            buf,
            // len < MAX_USERNAME_LEN
            len: len as u8,
        }
    }

    pub fn as_str(&self) -> &str {
        // Built from a `&str` prefix ending on a char boundary.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..usize::from(self.len)]
    }

    /// The whole NUL-padded buffer, as a C `char[MAX_USERNAME_LEN]` would hold it.
    pub fn as_buffer(&self) -> &[u8; MAX_USERNAME_LEN] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Username {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq<str> for Username {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Username {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A single roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: Username,
}
