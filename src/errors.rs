use std::io;

/// An error encountered while building a code table.
///
/// Neither variant is transient: the same input always produces the same error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No symbol with a positive count was left to build a tree from.
    #[error("cannot encode empty input")]
    EmptyInput,

    /// The tree handed to the extractor breaks the full-binary-tree invariant,
    /// or holds the same symbol at more than one leaf.
    #[error("malformed huffman tree: {0}")]
    MalformedTree(String),

    /// The combined count of a merged subtree does not fit in a `u64`.
    #[error("symbol counts overflow when merged")]
    CountOverflow,
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        let kind = match e {
            Error::EmptyInput | Error::CountOverflow => io::ErrorKind::InvalidInput,
            Error::MalformedTree(_) => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, e)
    }
}
