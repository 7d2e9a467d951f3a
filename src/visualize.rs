use dot::{Edges, GraphWalk, LabelText, Labeller, Nodes, Style};

use crate::circular_list::SENTINEL;
use crate::error::Result;
use crate::user_list::UserList;

type Slot = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    Next,
    Prev,
}

#[derive(Debug, Clone)]
struct Link {
    source: Slot,
    target: Slot,
    kind: LinkKind,
}

struct Ring<'a> {
    list: &'a UserList,
    slots: Vec<Slot>,
    links: Vec<Link>,
}

impl<'a> Labeller<'a, Slot, Link> for Ring<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("ring").unwrap()
    }

    fn node_id(&self, n: &Slot) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Slot) -> LabelText<'a> {
        match self.list.ring().get(*n) {
            Some(user) => LabelText::label(format!("{}: {}", user.id, user.name)),
            None => LabelText::label("sentinel"),
        }
    }

    fn node_shape(&self, n: &Slot) -> Option<LabelText<'a>> {
        (*n == SENTINEL).then(|| LabelText::label("doublecircle"))
    }

    fn edge_label(&self, e: &Link) -> LabelText<'a> {
        match e.kind {
            LinkKind::Next => LabelText::label("next"),
            LinkKind::Prev => LabelText::label("prev"),
        }
    }

    fn edge_style(&self, e: &Link) -> Style {
        match e.kind {
            LinkKind::Next => Style::Solid,
            LinkKind::Prev => Style::Dashed,
        }
    }
}

impl<'a> GraphWalk<'a, Slot, Link> for Ring<'a> {
    fn nodes(&self) -> Nodes<'_, Slot> {
        self.slots.as_slice().into()
    }

    fn edges(&self) -> Edges<'_, Link> {
        self.links.as_slice().into()
    }

    fn source(&self, e: &Link) -> Slot {
        e.source
    }

    fn target(&self, e: &Link) -> Slot {
        e.target
    }
}

/// Returns the ring of `list` in DOT format.
///
/// The sentinel is drawn as a double circle, `next` links are solid and
/// `prev` links are dashed. Nodes are labelled `<id>: <name>`.
///
/// Use it with `dot -Tsvg`.
pub fn draw_ring(list: &UserList) -> Result<String> {
    let ring = list.ring();
    let slots: Vec<Slot> = std::iter::once(SENTINEL)
        .chain(ring.iter().map(|(slot, _)| slot))
        .collect();

    let mut links = Vec::with_capacity(slots.len() * 2);
    for &slot in &slots {
        links.push(Link {
            source: slot,
            target: ring.next_of(slot),
            kind: LinkKind::Next,
        });
        links.push(Link {
            source: slot,
            target: ring.prev_of(slot),
            kind: LinkKind::Prev,
        });
    }

    let graph = Ring { list, slots, links };
    let mut buffer = Vec::new();
    dot::render(&graph, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ring_is_a_sentinel_loop() {
        let dot_str = draw_ring(&UserList::new()).unwrap();
        assert!(dot_str.starts_with("digraph ring {"));
        assert!(dot_str.contains("N0 -> N0"));
        assert!(dot_str.contains("sentinel"));
        assert!(!dot_str.contains("N1"));
    }

    #[test]
    fn test_ring_links() {
        let mut list = UserList::new();
        list.append("alice").unwrap();
        list.append("bob").unwrap();

        let dot_str = draw_ring(&list).unwrap();
        assert!(dot_str.contains("0: alice"));
        assert!(dot_str.contains("1: bob"));
        assert!(dot_str.contains("N0 -> N1"));
        assert!(dot_str.contains("N1 -> N2"));
        assert!(dot_str.contains("N2 -> N0"));
        assert!(dot_str.contains("N2 -> N1"));
        assert!(dot_str.contains("dashed"));
    }
}
