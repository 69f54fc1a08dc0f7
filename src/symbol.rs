use std::{fmt::Debug, hash::Hash};

/// An atomic unit of the input alphabet.
///
/// The label is the symbol's string form. It is only used to break ties
/// between equal counts while building the tree, so two distinct symbols must
/// never share a label.
pub trait Symbol: Clone + Eq + Hash + Debug {
    fn label(&self) -> String;
}

impl Symbol for char {
    fn label(&self) -> String {
        self.to_string()
    }
}

/// Bytes are labelled as two lowercase hex digits, so label order matches
/// numeric order.
impl Symbol for u8 {
    fn label(&self) -> String {
        hex::encode([*self])
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case('a', "a")]
    #[test_case(':', ":")]
    #[test_case('é', "é")]
    fn char_labels(symbol: char, expected: &str) {
        assert_eq!(symbol.label(), expected);
    }

    #[test_case(0x00, "00")]
    #[test_case(0x0a, "0a")]
    #[test_case(0xff, "ff")]
    fn byte_labels(symbol: u8, expected: &str) {
        assert_eq!(symbol.label(), expected);
    }

    #[test]
    fn byte_label_order_is_numeric() {
        let labels: Vec<_> = (0..=u8::MAX).map(|b| b.label()).collect();
        assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
