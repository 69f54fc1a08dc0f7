use std::collections::HashMap;

use crate::{Code, CodeTable, Error, Node, Symbol};

/// The code given to the only symbol of a one-leaf tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SingletonCode {
    /// `0`. Decodable in a plain bitstream.
    #[default]
    SingleBit,

    /// The zero-length root path. Only usable when the symbol count travels
    /// out-of-band.
    Empty,
}

/// Walks a Huffman tree and collects the code of every leaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    pub singleton: SingletonCode,
}

impl Extractor {
    pub fn new(singleton: SingletonCode) -> Self {
        Self { singleton }
    }

    /// Produce the code table for the tree under `root`.
    ///
    /// Going left appends a `0`, going right appends a `1`. Fails if an
    /// internal node is missing a child, or if a symbol sits at two leaves.
    pub fn extract<S: Symbol>(&self, root: &Node<S>) -> Result<CodeTable<S>, Error> {
        let root_code = match (root, self.singleton) {
            (Node::Leaf { .. }, SingletonCode::SingleBit) => Code::new().with_bit(false),
            _ => Code::new(),
        };

        let mut codes = HashMap::new();
        let mut stack = vec![(root, root_code)];

        while let Some((node, code)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    let label = symbol.label();
                    if codes.insert(symbol.clone(), code).is_some() {
                        let msg = format!("symbol {label:?} appears at more than one leaf");
                        return Err(Error::MalformedTree(msg));
                    }
                }
                Node::Internal {
                    label, left, right, ..
                } => {
                    let (Some(left), Some(right)) = (left.as_deref(), right.as_deref()) else {
                        let msg = format!("internal node {label:?} does not have two children");
                        return Err(Error::MalformedTree(msg));
                    };
                    stack.push((right, code.with_bit(true)));
                    stack.push((left, code.with_bit(false)));
                }
            }
        }

        log::debug!("extracted {} codes", codes.len());
        Ok(CodeTable::new(codes))
    }
}

/// [`Extractor::extract`] with the default [`SingletonCode`].
pub fn extract<S: Symbol>(root: &Node<S>) -> Result<CodeTable<S>, Error> {
    Extractor::default().extract(root)
}
