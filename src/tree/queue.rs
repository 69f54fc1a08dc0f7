use std::{
    cmp::Ordering,
    collections::{binary_heap::BinaryHeap, HashMap},
};

use super::Node;
use crate::Symbol;

/// A min-priority queue of subtrees.
///
/// Nodes are ordered by `(count, label, arrival)`, all ascending. Arrival is a
/// sequence number handed out on every push, so two subtrees with the same
/// count and label come out in the order they went in. Subtrees themselves are
/// never compared.
pub struct NodeQueue<S> {
    heap: BinaryHeap<Entry<S>>,
    arrivals: u64,
}

struct Entry<S> {
    count: u64,
    label: String,
    arrival: u64,
    node: Node<S>,
}

impl<S> Entry<S> {
    fn key(&self) -> (u64, &str, u64) {
        (self.count, self.label.as_str(), self.arrival)
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    /// Reversed, since `BinaryHeap` is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl<S: Symbol> NodeQueue<S> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            arrivals: 0,
        }
    }

    /// Build a queue holding one leaf per entry.
    ///
    /// Leaves are pushed in `(count, label)` order, so arrival numbers don't
    /// depend on the iteration order of `counts`.
    pub fn from_leaves(counts: HashMap<S, u64>) -> Self {
        let mut leaves: Vec<(u64, String, S)> = counts
            .into_iter()
            .map(|(symbol, count)| (count, symbol.label(), symbol))
            .collect();
        leaves.sort_by(|(c1, l1, _), (c2, l2, _)| (c1, l1).cmp(&(c2, l2)));

        let mut queue = Self::with_capacity(leaves.len());
        for (count, label, symbol) in leaves {
            queue.push_labelled(Node::leaf(symbol, count), label);
        }
        queue
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, node: Node<S>) {
        let label = node.label().into_owned();
        self.push_labelled(node, label);
    }

    fn push_labelled(&mut self, node: Node<S>, label: String) {
        let entry = Entry {
            count: node.count(),
            label,
            arrival: self.arrivals,
            node,
        };
        self.arrivals += 1;
        self.heap.push(entry);
    }

    /// Remove the minimum node.
    pub fn pop(&mut self) -> Option<Node<S>> {
        self.heap.pop().map(|entry| entry.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(queue: &mut NodeQueue<char>) -> Vec<String> {
        std::iter::from_fn(|| queue.pop())
            .map(|node| node.label().into_owned())
            .collect()
    }

    #[test]
    fn pops_by_count_then_label() {
        let counts: HashMap<char, u64> = [('d', 1), ('b', 2), ('c', 1), ('a', 2)].into();
        let mut queue = NodeQueue::from_leaves(counts);
        assert_eq!(queue.len(), 4);
        assert_eq!(labels(&mut queue), ["c", "d", "a", "b"]);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn full_ties_pop_in_arrival_order() {
        let mut queue = NodeQueue::with_capacity(2);

        // Same count and same label, but different shapes.
        let first = Node::Internal {
            count: 2,
            label: "x:y".into(),
            left: Some(Box::new(Node::leaf('x', 1))),
            right: Some(Box::new(Node::leaf('y', 1))),
        };
        let second = Node::Internal {
            count: 2,
            label: "x:y".into(),
            left: Some(Box::new(Node::leaf('y', 1))),
            right: Some(Box::new(Node::leaf('x', 1))),
        };
        queue.push(first.clone());
        queue.push(second.clone());

        assert_eq!(queue.pop(), Some(first));
        assert_eq!(queue.pop(), Some(second));
        assert_eq!(queue.pop(), None);
    }
}
