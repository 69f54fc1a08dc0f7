//! Static Huffman code tables.
//!
//! Symbols are counted ([`frequency`]), merged into a Huffman tree
//! ([`tree::build`]), and the tree is walked into a symbol-to-code table
//! ([`extract`]). Equal counts are broken by symbol label, so a given input
//! always yields the same table.

mod code;
mod errors;
pub mod extract;
pub mod frequency;
mod symbol;
pub mod tree;

pub use crate::code::{Code, CodeTable, ParseCodeError};
pub use crate::errors::Error;
pub use crate::extract::{Extractor, SingletonCode};
pub use crate::frequency::FrequencyTable;
pub use crate::symbol::Symbol;
pub use crate::tree::Node;

/// Build the code table for the characters of `text`.
pub fn code_table(text: &str) -> Result<CodeTable<char>, Error> {
    let frequencies = frequency::count(text.chars());
    let root = tree::build(&frequencies)?;
    extract::extract(&root)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn empty_text_cannot_be_encoded() {
        assert_eq!(code_table(""), Err(Error::EmptyInput));
    }

    #[test_case("aaabbc")]
    #[test_case("A")]
    #[test_case("Hello world!")]
    #[test_case("the quick brown fox jumps over the lazy dog")]
    fn covers_every_character(text: &str) {
        let table = code_table(text).unwrap();
        for c in text.chars() {
            assert!(table.get(&c).is_some_and(|code| !code.is_empty()), "{c:?}");
        }
        assert!(table.is_prefix_free());
    }

    #[test]
    fn bytes_use_hex_labels() -> anyhow::Result<()> {
        let frequencies = frequency::count([0x0a_u8, 0x0a, 0xff]);
        let root = tree::build(&frequencies)?;
        let table = extract::extract(&root)?;

        assert_eq!(root.label(), "ff:0a");
        assert_eq!(table.to_string(), "0a\t1\nff\t0\n");
        Ok(())
    }
}
