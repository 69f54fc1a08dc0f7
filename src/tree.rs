mod queue;

use std::{borrow::Cow, collections::HashMap, fmt};

use self::queue::NodeQueue;
use crate::{Error, FrequencyTable, Symbol};

/// Joins the labels of two merged subtrees.
pub const LABEL_SEPARATOR: char = ':';

/// A node of a Huffman tree.
///
/// Each child is owned by exactly one parent. Children are optional only so
/// that a tree supplied from outside this crate can be represented (and
/// rejected) even when it is malformed; [`build`] always fills both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        count: u64,
    },
    Internal {
        count: u64,
        /// The children's labels joined by [`LABEL_SEPARATOR`]. Only used for
        /// tie-breaking and debugging.
        label: String,
        left: Option<Box<Node<S>>>,
        right: Option<Box<Node<S>>>,
    },
}

impl<S: Symbol> Node<S> {
    pub fn leaf(symbol: S, count: u64) -> Self {
        Node::Leaf { symbol, count }
    }

    /// Merge two subtrees under a new internal node, `a` on the left.
    pub fn merge(a: Self, b: Self) -> Result<Self, Error> {
        let count = a.count().checked_add(b.count()).ok_or(Error::CountOverflow)?;
        let label = format!("{}{LABEL_SEPARATOR}{}", a.label(), b.label());
        Ok(Node::Internal {
            count,
            label,
            left: Some(Box::new(a)),
            right: Some(Box::new(b)),
        })
    }

    pub fn count(&self) -> u64 {
        match self {
            Node::Leaf { count, .. } | Node::Internal { count, .. } => *count,
        }
    }

    /// A leaf's label is its symbol's label.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Node::Leaf { symbol, .. } => Cow::Owned(symbol.label()),
            Node::Internal { label, .. } => Cow::Borrowed(label.as_str()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Iterate over every node, parents before children, left before right.
    pub fn nodes(&self) -> impl Iterator<Item = (&Node<S>, usize)> {
        let mut stack = vec![(self, 0)];
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let Node::Internal { left, right, .. } = node {
                // Right goes on first so that left is visited first.
                stack.extend(right.as_deref().map(|n| (n, depth + 1)));
                stack.extend(left.as_deref().map(|n| (n, depth + 1)));
            }
            Some((node, depth))
        })
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes().map(|(_, depth)| depth).max().unwrap_or(0)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes().filter(|(node, _)| node.is_leaf()).count()
    }
}

/// Renders one node per line, indented by depth.
impl<S: Symbol> fmt::Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, depth) in self.nodes() {
            let indent = "  ".repeat(depth);
            match node {
                Node::Leaf { symbol, count } => {
                    writeln!(f, "{indent}leaf {:?} [count: {count}]", symbol.label())?
                }
                Node::Internal { count, label, .. } => {
                    writeln!(f, "{indent}internal {label:?} [count: {count}]")?
                }
            }
        }
        Ok(())
    }
}

/// Build the Huffman tree for `frequencies`.
///
/// Entries with a count of zero or less are ignored. Equal counts are ordered by
/// label, so the same table always produces the same tree.
pub fn build<S: Symbol>(frequencies: &FrequencyTable<S>) -> Result<Node<S>, Error> {
    let counts: HashMap<S, u64> = frequencies
        .iter()
        .filter(|&(_, &n)| n > 0)
        .map(|(symbol, &n)| (symbol.clone(), n as u64))
        .collect();
    if counts.is_empty() {
        return Err(Error::EmptyInput);
    }

    let symbols = counts.len();
    let mut queue = NodeQueue::from_leaves(counts);

    while queue.len() > 1 {
        let (Some(a), Some(b)) = (queue.pop(), queue.pop()) else {
            unreachable!("queue held at least two nodes");
        };
        log::trace!(
            "merging {:?} ({}) with {:?} ({})",
            a.label(),
            a.count(),
            b.label(),
            b.count()
        );
        queue.push(Node::merge(a, b)?);
    }

    let root = queue.pop().ok_or(Error::EmptyInput)?;
    log::debug!(
        "built huffman tree: {symbols} symbols, total count {}, depth {}",
        root.count(),
        root.depth()
    );
    Ok(root)
}
