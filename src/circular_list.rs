use std::collections::TryReserveError;
use std::iter::FusedIterator;

/// Index of the sentinel slot. It never carries a value.
pub const SENTINEL: usize = 0;

/// Circular doubly linked list with a sentinel, stored as an arena.
///
/// Links are plain indices into the arena, so `prev` and `next` never own
/// anything: the vectors own every value and a link is only a position.
///
/// Slot [`SENTINEL`] is reserved. Its `next` is the first element and its
/// `prev` is the last one; on an empty list both point back at itself.
#[derive(Debug, Clone)]
pub struct CircularList<T> {
    prev: Vec<usize>,
    next: Vec<usize>,
    /// Maps internal index to actual value, `None` only for the sentinel
    vals: Vec<Option<T>>,
}

impl<T> CircularList<T> {
    pub fn new() -> Self {
        Self {
            prev: vec![SENTINEL],
            next: vec![SENTINEL],
            vals: vec![None],
        }
    }

    /// Links `value` between the current tail and the sentinel and returns its slot.
    ///
    /// Storage is reserved before any link is touched, so on error the list is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<usize, TryReserveError> {
        self.prev.try_reserve(1)?;
        self.next.try_reserve(1)?;
        self.vals.try_reserve(1)?;

        let idx = self.vals.len();
        let tail = self.prev[SENTINEL];

        self.vals.push(Some(value));
        self.prev.push(tail);
        self.next.push(SENTINEL);
        self.next[tail] = idx;
        self.prev[SENTINEL] = idx;

        Ok(idx)
    }

    pub fn len(&self) -> usize {
        self.vals.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.next[SENTINEL] == SENTINEL
    }

    /// Number of arena slots, the sentinel included.
    pub fn slot_count(&self) -> usize {
        self.vals.len()
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.vals.get(idx).and_then(Option::as_ref)
    }

    pub fn next_of(&self, idx: usize) -> usize {
        self.next[idx]
    }

    pub fn prev_of(&self, idx: usize) -> usize {
        self.prev[idx]
    }

    pub fn front(&self) -> Option<&T> {
        self.get(self.next[SENTINEL])
    }

    pub fn back(&self) -> Option<&T> {
        self.get(self.prev[SENTINEL])
    }

    /// Walks the ring from `sentinel.next`, yielding `(slot, value)` pairs.
    ///
    /// Reversing it walks `prev` from `sentinel.prev` instead.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.next[SENTINEL],
            back: self.prev[SENTINEL],
            remaining: self.len(),
        }
    }

    /// Verifies that every slot is mutually linked with its neighbours and that
    /// walking `next` from the sentinel visits every slot exactly once.
    ///
    /// Returns the first slot at which the ring is broken.
    pub fn check_links(&self) -> Result<(), usize> {
        let n = self.vals.len();
        for idx in 0..n {
            let (p, nx) = (self.prev[idx], self.next[idx]);
            if p >= n || nx >= n || self.next[p] != idx || self.prev[nx] != idx {
                return Err(idx);
            }
            if (idx == SENTINEL) != self.vals[idx].is_none() {
                return Err(idx);
            }
        }

        let mut visited = vec![false; n];
        let mut curr = SENTINEL;
        for _ in 0..n {
            if visited[curr] {
                return Err(curr);
            }
            visited[curr] = true;
            curr = self.next[curr];
        }
        if curr != SENTINEL {
            return Err(curr);
        }
        Ok(())
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    list: &'a CircularList<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        let val = self.list.get(idx)?;
        self.front = self.list.next[idx];
        self.remaining -= 1;
        Some((idx, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        let val = self.list.get(idx)?;
        self.back = self.list.prev[idx];
        self.remaining -= 1;
        Some((idx, val))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
