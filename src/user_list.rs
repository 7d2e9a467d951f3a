use tracing::debug;

use crate::circular_list::CircularList;
use crate::error::{Error, Result};
use crate::user::{User, UserId, Username};

/// Default bound on the number of users, the range of a C `int` id.
pub const MAX_USERS: UserId = i32::MAX as UserId;

/// Append-only roster kept in a [`CircularList`].
///
/// Ids start at 0 and grow by one per successful [`UserList::append`].
#[derive(Debug, Clone)]
pub struct UserList {
    ring: CircularList<User>,
    next_id: UserId,
    id_limit: UserId,
}

impl UserList {
    pub fn new() -> Self {
        Self::with_id_limit(MAX_USERS)
    }

    /// A list that refuses to hold more than `limit` users.
    pub fn with_id_limit(limit: UserId) -> Self {
        Self {
            ring: CircularList::new(),
            next_id: 0,
            id_limit: limit,
        }
    }

    /// Stores `name` (truncated to fit a [`Username`]) at the tail and returns its id.
    ///
    /// Nothing is truncated or stripped beyond the fixed width: trailing
    /// newlines and empty names are kept as given. On error the list is unchanged.
    pub fn append(&mut self, name: &str) -> Result<UserId> {
        if self.next_id >= self.id_limit {
            return Err(Error::Capacity {
                limit: self.id_limit,
            });
        }

        let id = self.next_id;
        let user = User {
            id,
            name: Username::new(name),
        };
        let slot = self.ring.push_back(user)?;
        self.next_id += 1;

        debug!(id, slot, name = %user.name, "appended user");
        Ok(id)
    }

    /// `(id, name)` pairs in insertion order; `.rev()` walks the `prev` links.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (UserId, &str)> + ExactSizeIterator {
        self.ring.iter().map(|(_, user)| (user.id, user.name.as_str()))
    }

    pub fn users(&self) -> impl DoubleEndedIterator<Item = &User> + ExactSizeIterator {
        self.ring.iter().map(|(_, user)| user)
    }

    pub fn ring(&self) -> &CircularList<User> {
        &self.ring
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Id the next successful append will receive.
    pub fn next_id(&self) -> UserId {
        self.next_id
    }

    pub fn id_limit(&self) -> UserId {
        self.id_limit
    }
}

impl Default for UserList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_names::random_names;
    use crate::user::MAX_USERNAME_LEN;

    fn truncated(name: &str) -> &str {
        let mut len = name.len().min(MAX_USERNAME_LEN - 1);
        while !name.is_char_boundary(len) {
            len -= 1;
        }
        &name[..len]
    }

    #[test]
    fn test_empty_list() {
        let list = UserList::new();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.next_id(), 0);
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut list = UserList::new();
        assert_eq!(list.append("alice").unwrap(), 0);
        assert_eq!(list.append("bob").unwrap(), 1);
        assert_eq!(list.append("carol").unwrap(), 2);

        let roster: Vec<_> = list.iter().collect();
        assert_eq!(roster, vec![(0, "alice"), (1, "bob"), (2, "carol")]);

        let reversed: Vec<_> = list.iter().rev().map(|(id, _)| id).collect();
        assert_eq!(reversed, vec![2, 1, 0]);
    }

    #[test]
    fn test_users_expose_records() {
        let mut list = UserList::new();
        list.append("dave").unwrap();
        list.append("erin").unwrap();

        let last = list.users().next_back().unwrap();
        assert_eq!(last.id, 1);
        assert_eq!(last.name, "erin");
        assert_eq!(list.users().len(), 2);
    }

    #[test]
    fn test_empty_and_long_names() {
        let mut list = UserList::new();
        list.append("").unwrap();
        list.append(&"a".repeat(40)).unwrap();
        list.append("eve\n").unwrap();

        let cut = "a".repeat(31);
        let names: Vec<_> = list.iter().map(|(_, name)| name).collect();
        assert_eq!(names, vec!["", cut.as_str(), "eve\n"]);
    }

    #[test]
    fn test_capacity_leaves_list_unchanged() {
        let mut list = UserList::with_id_limit(2);
        list.append("a").unwrap();
        list.append("b").unwrap();

        let err = list.append("c").unwrap_err();
        assert!(matches!(err, Error::Capacity { limit: 2 }));
        assert_eq!(list.len(), 2);
        assert_eq!(list.next_id(), 2);
        assert_eq!(list.id_limit(), 2);
        assert_eq!(list.ring().check_links(), Ok(()));
    }

    #[test]
    fn test_zero_limit_rejects_everything() {
        let mut list = UserList::with_id_limit(0);
        assert!(matches!(list.append("a"), Err(Error::Capacity { limit: 0 })));
        assert!(list.is_empty());
    }

    #[test]
    fn test_random_rosters_keep_invariants() {
        for seed in 0..50 {
            let names = random_names(seed as usize * 3, 48, seed);
            let mut list = UserList::new();
            for (i, name) in names.iter().enumerate() {
                assert_eq!(list.append(name).unwrap() as usize, i);
                assert_eq!(list.ring().check_links(), Ok(()));
            }

            let roster: Vec<_> = list.iter().collect();
            assert_eq!(roster.len(), names.len());
            for (i, ((id, stored), name)) in roster.iter().zip(&names).enumerate() {
                assert_eq!(*id as usize, i);
                assert_eq!(*stored, truncated(name));
                assert!(stored.len() < MAX_USERNAME_LEN);
            }

            let forward: Vec<_> = list.iter().collect();
            let mut backward: Vec<_> = list.iter().rev().collect();
            backward.reverse();
            assert_eq!(forward, backward);
            assert_eq!(forward, roster);
        }
    }
}
